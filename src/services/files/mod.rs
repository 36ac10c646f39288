//! 辞职信文件下载服务

mod download;

pub struct FileService;

impl FileService {
    pub fn new_lazy() -> Self {
        Self
    }
}
