/// Filter names accepted by the filter operation, each mapped to the SAM
/// flag mask that `samtools view -F` excludes.
///
/// 1024 marks PCR/optical duplicates; 260 combines unmapped (4) with
/// secondary alignment (256).
pub const FILTERS: &[(&str, u16)] = &[("duplicate", 1024), ("unmapped", 260)];

pub fn flag_for(name: &str) -> Option<u16> {
    FILTERS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, flag)| flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_filters_resolve() {
        assert_eq!(flag_for("duplicate"), Some(1024));
        assert_eq!(flag_for("unmapped"), Some(260));
    }

    #[test]
    fn unknown_filter_is_rejected() {
        assert_eq!(flag_for("supplementary"), None);
        assert_eq!(flag_for(""), None);
    }
}
