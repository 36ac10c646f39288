//! 离职申请服务：提交、审核列表、详情与裁决

mod decision;
mod detail;
mod list;
mod submit;

pub struct RequestService;

impl RequestService {
    pub fn new_lazy() -> Self {
        Self
    }
}
