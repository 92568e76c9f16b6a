// Normalização de CNPJ: a busca tolera qualquer variante de pontuação
// (pontos, barra, hífen, espaços) comparando só os dígitos.

/// Remove tudo que não é dígito. "12.345.678/0001-90" -> "12345678000190".
pub fn normalize(cnpj: &str) -> String {
    cnpj.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Um CNPJ completo tem 14 dígitos após a limpeza.
pub fn is_complete(cnpj: &str) -> bool {
    normalize(cnpj).len() == 14
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_standard_punctuation() {
        assert_eq!(normalize("12.345.678/0001-90"), "12345678000190");
    }

    #[test]
    fn raw_digits_pass_through() {
        assert_eq!(normalize("12345678000190"), "12345678000190");
    }

    #[test]
    fn tolerates_spaces_and_mixed_formats() {
        assert_eq!(normalize(" 12.345.678 / 0001 - 90 "), "12345678000190");
        assert_eq!(normalize("12345678/000190"), "12345678000190");
    }

    #[test]
    fn punctuation_variants_normalize_equal() {
        let variants = [
            "12.345.678/0001-90",
            "12345678000190",
            "12.345.678.0001.90",
            "12-345-678/0001-90",
        ];
        for v in variants {
            assert_eq!(normalize(v), normalize(variants[0]));
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("98.765.432/0001-10");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn complete_cnpj_has_fourteen_digits() {
        assert!(is_complete("12.345.678/0001-90"));
        assert!(!is_complete("12.345.678"));
        assert!(!is_complete(""));
    }
}
