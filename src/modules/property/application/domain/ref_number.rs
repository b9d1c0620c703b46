use rand::Rng;

/// `PROP-<year>-<6 digits>`
pub fn property_ref<R: Rng + ?Sized>(year: i32, rng: &mut R) -> String {
    format!("PROP-{}-{}", year, rng.gen_range(100_000..=999_999))
}
