pub mod config;
pub mod error;
pub mod issuer;
pub mod presign;
pub mod target;
pub mod types;

pub use config::{Config, DEFAULT_EXPIRES_IN};
pub use error::PresignError;
pub use issuer::{issue_presigned_url, Issuer};
pub use presign::{Presign, S3Presigner, DEFAULT_REGION};
pub use target::{AccessPointArn, ArnService, Target};
pub use types::*;
