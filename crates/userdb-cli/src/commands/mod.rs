pub mod call;
pub mod manifest;
pub mod seed;
pub mod serve;
pub mod tools;
