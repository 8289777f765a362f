pub mod operator_access;

pub use operator_access::OperatorAccessKey;
