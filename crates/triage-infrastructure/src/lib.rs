pub mod backend;
pub mod fallback;
pub mod file_backlog_repository;
pub mod file_proposal_repository;
pub mod paths;
pub mod storage;
pub mod user_backlog_repository;

pub use crate::backend::select_backlog_repository;
pub use crate::fallback::FallbackBacklogRepository;
pub use crate::file_backlog_repository::FileBacklogRepository;
pub use crate::file_proposal_repository::FileProposalRepository;
pub use crate::paths::TriagePaths;
pub use crate::user_backlog_repository::UserDirBacklogRepository;
