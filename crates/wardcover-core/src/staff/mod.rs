pub mod category;
pub mod record;

pub use category::StaffCategory;
pub use record::StaffGroupRecord;
