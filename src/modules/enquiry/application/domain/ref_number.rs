use rand::Rng;

use super::entities::EnquiryKind;

/// `PROP-<year>-<4 digits>` or `GEN-<year>-<4 digits>`. Not unique.
pub fn enquiry_ref<R: Rng + ?Sized>(kind: EnquiryKind, year: i32, rng: &mut R) -> String {
    format!("{}-{}-{}", kind.prefix(), year, rng.gen_range(1000..=9999))
}
