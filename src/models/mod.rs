pub mod auth;
pub mod clearances;
pub mod common;
pub mod faculties;
pub mod files;
pub mod requests;
pub mod users;

pub use common::response::ApiResponse;

/// 业务错误码，随 ApiResponse.code 返回给前端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1001,
    Unauthorized = 1002,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1005,
    AuthFailed = 1006,
    InvalidToken = 1007,
    UserAlreadyExists = 1101,
    UserNotFound = 1102,
    FacultyNotFound = 1201,

    // 离职申请 2xxx
    RequestNotFound = 2001,
    RequestNotEditable = 2002,
    RemarksRequired = 2003,
    NotFullyCleared = 2004,
    InvalidStatusTransition = 2005,

    // 清算模块 3xxx
    ClearanceModuleInvalid = 3001,
    ClearanceDeclarationIncomplete = 3002,
    ClearancePermissionDenied = 3003,

    // 文档签发 4xxx
    DocumentKindInvalid = 4001,
    DocumentNotIssuable = 4002,

    // 文件 5xxx
    FileNotFound = 5001,
    FileUploadFailed = 5002,
    FileTypeNotAllowed = 5003,
    FileSizeExceeded = 5004,
    ResignationLetterRequired = 5005,
    MultifileUploadNotAllowed = 5006,
}

/// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
