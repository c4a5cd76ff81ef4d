pub mod member;
pub mod offering;
pub mod search;
pub mod service_time;
pub mod status;
pub mod term;
pub mod window;

pub use member::{Gender, MaritalStatus, MemberAgeCategory, MemberRole};
pub use offering::{Currency, OfferingExpenseType, OfferingIncomeSubtype};
pub use search::{MetricsSearchType, SortDirection};
pub use status::RecordStatus;
pub use term::TermError;
pub use window::DateWindow;
