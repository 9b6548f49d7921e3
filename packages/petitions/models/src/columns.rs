//! Exact source column headers for both datasets.
//!
//! Header strings are matched exactly against the CSV header row; the
//! employer list doubles as the fixed display order of the detail table.

/// City column of the aggregate dataset.
pub const CITY: &str = "Petitioner City";
/// Latitude column of the aggregate dataset.
pub const LATITUDE: &str = "Latitude";
/// Longitude column of the aggregate dataset.
pub const LONGITUDE: &str = "Longitude";
/// Petition count column of the aggregate dataset.
pub const PETITION_COUNT: &str = "Petition Count";

/// Fiscal year column of the employer dataset.
pub const FISCAL_YEAR: &str = "Fiscal Year";
/// Employer name column of the employer dataset.
pub const EMPLOYER_NAME: &str = "Employer (Petitioner) Name";
/// Tax identifier column of the employer dataset.
pub const TAX_ID: &str = "Tax ID";
/// Industry code column of the employer dataset.
pub const INDUSTRY_CODE: &str = "Industry (NAICS) Code";
/// Petitioner state column of the employer dataset.
pub const STATE: &str = "Petitioner State";
/// Petitioner zip code column of the employer dataset.
pub const ZIP_CODE: &str = "Petitioner Zip Code";
/// New-employment approvals column.
pub const NEW_EMPLOYMENT_APPROVAL: &str = "New Employment Approval";
/// New-employment denials column.
pub const NEW_EMPLOYMENT_DENIAL: &str = "New Employment Denial";
/// Continuation approvals column.
pub const CONTINUATION_APPROVAL: &str = "Continuation Approval";
/// Continuation denials column.
pub const CONTINUATION_DENIAL: &str = "Continuation Denial";
/// Change-with-same-employer approvals column.
pub const CHANGE_SAME_EMPLOYER_APPROVAL: &str = "Change with Same Employer Approval";
/// Change-with-same-employer denials column.
pub const CHANGE_SAME_EMPLOYER_DENIAL: &str = "Change with Same Employer Denial";
/// New-concurrent approvals column.
pub const NEW_CONCURRENT_APPROVAL: &str = "New Concurrent Approval";
/// New-concurrent denials column.
pub const NEW_CONCURRENT_DENIAL: &str = "New Concurrent Denial";
/// Change-of-employer approvals column.
pub const CHANGE_OF_EMPLOYER_APPROVAL: &str = "Change of Employer Approval";
/// Change-of-employer denials column.
pub const CHANGE_OF_EMPLOYER_DENIAL: &str = "Change of Employer Denial";
/// Amended approvals column.
pub const AMENDED_APPROVAL: &str = "Amended Approval";
/// Amended denials column.
pub const AMENDED_DENIAL: &str = "Amended Denial";
/// Total approvals column.
pub const TOTAL_APPROVALS: &str = "Total Approvals";

/// The employer dataset's column allow-list, in display order.
///
/// Columns outside this list are dropped at load time; the detail table
/// renders exactly these headers in exactly this order.
pub const EMPLOYER_DISPLAY_COLUMNS: [&str; 20] = [
    FISCAL_YEAR,
    EMPLOYER_NAME,
    TAX_ID,
    INDUSTRY_CODE,
    CITY,
    STATE,
    ZIP_CODE,
    NEW_EMPLOYMENT_APPROVAL,
    NEW_EMPLOYMENT_DENIAL,
    CONTINUATION_APPROVAL,
    CONTINUATION_DENIAL,
    CHANGE_SAME_EMPLOYER_APPROVAL,
    CHANGE_SAME_EMPLOYER_DENIAL,
    NEW_CONCURRENT_APPROVAL,
    NEW_CONCURRENT_DENIAL,
    CHANGE_OF_EMPLOYER_APPROVAL,
    CHANGE_OF_EMPLOYER_DENIAL,
    AMENDED_APPROVAL,
    AMENDED_DENIAL,
    TOTAL_APPROVALS,
];
