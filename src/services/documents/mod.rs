//! 离职文档签发服务

mod issue;

pub struct DocumentService;

impl DocumentService {
    pub fn new_lazy() -> Self {
        Self
    }
}
