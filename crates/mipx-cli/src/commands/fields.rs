//! Fields command - list the fields of an extraction record.

use clap::Args;
use console::style;

use mipx_core::{Field, FieldKind};

/// Arguments for the fields command.
#[derive(Args)]
pub struct FieldsArgs {
    /// Only list fields of this kind
    #[arg(short, long, value_enum)]
    kind: Option<KindFilter>,

    /// Print bare keys, one per line
    #[arg(long)]
    plain: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum KindFilter {
    FreeText,
    Identifier,
    Amount,
    Date,
    Enum,
}

impl KindFilter {
    fn matches(self, kind: FieldKind) -> bool {
        matches!(
            (self, kind),
            (KindFilter::FreeText, FieldKind::FreeText)
                | (KindFilter::Identifier, FieldKind::Identifier)
                | (KindFilter::Amount, FieldKind::Amount)
                | (KindFilter::Date, FieldKind::Date)
                | (KindFilter::Enum, FieldKind::Enum)
        )
    }
}

fn kind_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::FreeText => "free-text",
        FieldKind::Identifier => "identifier",
        FieldKind::Amount => "amount",
        FieldKind::Date => "date",
        FieldKind::Enum => "enum",
    }
}

pub async fn run(args: FieldsArgs) -> anyhow::Result<()> {
    let fields: Vec<Field> = Field::ALL
        .iter()
        .copied()
        .filter(|f| args.kind.is_none_or(|k| k.matches(f.kind())))
        .collect();

    for field in &fields {
        if args.plain {
            println!("{}", field.key());
        } else {
            println!(
                "{} {}",
                style(format!("{:<22}", field.key())).cyan(),
                kind_name(field.kind())
            );
        }
    }

    if !args.plain {
        println!();
        println!("{} {} fields", style("ℹ").blue(), fields.len());
    }

    Ok(())
}
