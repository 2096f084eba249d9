//! Label synonyms searched by the keyword locator, per schema field.

use crate::models::Field;

/// Labels that introduce the given field's value.
///
/// All labels are tried and the best-scoring value wins, so order carries no
/// priority. Fields found only by direct pattern have no labels.
pub fn synonyms(field: Field) -> &'static [&'static str] {
    match field {
        Field::BrokerName => &[
            "Broker",
            "Broker Name",
            "Agent",
            "Agent Name",
            "Intermediary",
            "Broker Code",
        ],
        Field::Cc => &["CC", "Cubic Capacity", "Engine CC", "Cubic Capacity (CC)"],
        Field::Cgst => &["CGST", "CGST Amount", "Central GST"],
        Field::ChasisNumber => &[
            "Chassis No",
            "Chassis Number",
            "Chassis",
            "Chassis No.",
            "CH No",
            "CH Number",
        ],
        Field::CityName => &["City", "City Name", "City of Registration"],
        Field::Cover => &["Cover", "Coverage", "Cover Type", "Type of Cover", "Policy Cover"],
        Field::CustomerEmail => &["Email", "E-mail", "Email ID", "Email Address"],
        Field::CustomerName => &[
            "Customer Name",
            "Insured Name",
            "Name of Insured",
            "Policy Holder",
            "Insured",
            "Name",
            "Customer",
            "Insured Person",
            "Proposer Name",
            "Proposer",
            "Name of Proposer",
        ],
        Field::CvType => &[
            "CV Type",
            "Vehicle Type",
            "Type of Vehicle",
            "Commercial Vehicle Type",
            "Vehicle Category",
        ],
        Field::EngineNumber => &[
            "Engine No",
            "Engine Number",
            "Engine",
            "Engine No.",
            "EN No",
            "EN Number",
        ],
        Field::FinancierName => &[
            "Financier",
            "Financier Name",
            "Finance Company",
            "Loan Provider",
            "Financing Company",
        ],
        Field::FuelType => &["Fuel Type", "Fuel", "Type of Fuel"],
        Field::Gst => &["GST", "GST Amount", "Goods and Services Tax", "Total GST"],
        Field::Gvw => &["GVW", "Gross Vehicle Weight", "Vehicle Weight", "Gross Weight"],
        Field::IdvSumInsured => &[
            "IDV",
            "Sum Insured",
            "Insured Value",
            "IDV Amount",
            "Sum Assured",
            "Insured Sum",
        ],
        Field::Igst => &["IGST", "IGST Amount", "Integrated GST"],
        Field::InsuranceCompanyName => &[
            "Insurance Company",
            "Company Name",
            "Insurer",
            "Insurance Co",
            "Company",
            "Underwritten by",
            "Issued by",
            "Insurance Provider",
        ],
        Field::CompleteLocationAddress => &[
            "Address",
            "Complete Address",
            "Location",
            "Residential Address",
            "Permanent Address",
            "Correspondence Address",
            "Registered Address",
            "Full Address",
        ],
        Field::MobNo => &[
            "Mobile",
            "Phone",
            "Contact",
            "Mobile No",
            "Phone No",
            "Mob No",
            "Mobile Number",
        ],
        Field::Ncb => &[
            "NCB",
            "No Claim Bonus",
            "NCB %",
            "No Claim Bonus %",
            "NCB Percentage",
        ],
        Field::NetPremium => &["Net Premium", "Premium", "Net Premium Amount", "Base Premium"],
        Field::NomineeName => &["Nominee", "Nominee Name", "Name of Nominee"],
        Field::NomineeRelationship => &[
            "Nominee Relationship",
            "Relationship",
            "Relation",
            "Relationship with Nominee",
            "Relation with Nominee",
        ],
        Field::OdExpireDate => &[
            "OD Expire",
            "OD Expiry",
            "Own Damage Expiry",
            "OD Expiry Date",
            "OD Expire Date",
        ],
        Field::OdPremium => &[
            "OD Premium",
            "Own Damage Premium",
            "OD Premium Amount",
            "Own Damage",
        ],
        // Context block searched for a six-digit run.
        Field::Pincode => &["Address", "City", "Location"],
        Field::PolicyIssueDate => &[
            "Policy Issue Date",
            "Issue Date",
            "Date of Issue",
            "Policy Date",
            "Issued On",
            "Policy Issued On",
            "Date of Policy",
            "Policy Issued Date",
        ],
        Field::PolicyNo => &[
            "Policy No",
            "Policy Number",
            "Policy No.",
            "Policy #",
            "POL No",
            "POL Number",
        ],
        Field::ProductCode => &["Product Code", "Product", "Product ID", "Code"],
        Field::RegistrationDate => &[
            "Registration Date",
            "Reg Date",
            "Date of Registration",
            "Registration",
            "Regn Date",
        ],
        Field::RegistrationNumber => &[
            "Registration No",
            "Reg No",
            "Vehicle No",
            "Registration Number",
            "Reg. No",
            "Vehicle Number",
            "RC No",
            "RC Number",
            "Regn No",
        ],
        Field::RiskEndDate => &[
            "Risk End Date",
            "Coverage End",
            "End Date",
            "To Date",
            "Period To",
            "Coverage To",
            "Expiry Date",
            "Policy End",
            "Coverage End Date",
        ],
        Field::RiskStartDate => &[
            "Risk Start Date",
            "Coverage Start",
            "Start Date",
            "From Date",
            "Period From",
            "Coverage From",
            "Policy Start",
            "Coverage Start Date",
        ],
        Field::Sgst => &["SGST", "SGST Amount", "State GST"],
        Field::StateName => &["State", "State Name", "State of Registration"],
        Field::TotalPremium => &[
            "Total Premium",
            "Premium Total",
            "Total Amount",
            "Grand Total",
            "Total",
            "Final Premium",
        ],
        Field::TpOnlyPremium => &[
            "TP Premium",
            "Third Party Premium",
            "TP Only Premium",
            "TP Premium Amount",
            "Third Party",
            "TP",
        ],
        Field::VehicleMake => &[
            "Make",
            "Vehicle Make",
            "Manufacturer",
            "Brand",
            "Make of Vehicle",
            "Car Make",
        ],
        Field::VehicleModel => &[
            "Model",
            "Vehicle Model",
            "Model Name",
            "Model of Vehicle",
            "Car Model",
        ],
        Field::VehicleSubType => &[
            "Sub Type",
            "Vehicle Sub Type",
            "Sub-Type",
            "Type",
            "Vehicle Type",
            "Body Type",
        ],
        Field::VehicleVariant => &["Variant", "Vehicle Variant", "Variant Name", "Car Variant"],
        Field::YearOfManufacture => &[],
    }
}
