pub mod book;
pub mod check;
pub mod frames;
pub mod init;
pub mod scrub;
pub mod serve;
