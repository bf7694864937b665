mod chilean_rut_checksum;

pub use chilean_rut_checksum::ChileanRutChecksum;

pub trait Validator: Send + Sync {
    fn is_valid_match(&self, regex_match: &str) -> bool;
}
