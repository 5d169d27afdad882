pub mod attachment_files;
pub mod clickhouse_repo;
pub mod memory_archive;

pub use attachment_files::*;
pub use clickhouse_repo::*;
pub use memory_archive::*;
