pub mod response;
pub mod visit;

pub use response::{
    ClearLogsData, ErrorResponse, LogEntry, LogsData, RecordVisitData, SuccessResponse,
};
pub use visit::VisitEvent;
