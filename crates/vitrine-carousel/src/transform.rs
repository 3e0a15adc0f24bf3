//! Reading and writing CSS transform strings.

/// Horizontal translation encoded in a computed `transform` value.
///
/// Browsers report computed transforms as `matrix(a, b, c, d, tx, ty)` or
/// `matrix3d(...)` with sixteen entries. Anything else, including `none`,
/// yields `None`.
pub fn parse_translate_x(value: &str) -> Option<f64> {
    let value = value.trim();
    let (args, index) = if let Some(rest) = value.strip_prefix("matrix3d(") {
        (rest, 12)
    } else if let Some(rest) = value.strip_prefix("matrix(") {
        (rest, 4)
    } else {
        return None;
    };
    let args = args.strip_suffix(')')?;
    let tx = args.split(',').nth(index)?.trim().parse::<f64>().ok()?;
    tx.is_finite().then_some(tx)
}

/// Rendered translation, or `0` when the value is missing or unreadable.
pub fn rendered_translate_x(value: Option<&str>) -> f64 {
    value.and_then(parse_translate_x).unwrap_or(0.0)
}

pub fn translate3d(x: f64) -> String {
    format!("translate3d({x}px, 0, 0)")
}

pub fn card_rotation(rotation_deg: f64, perspective_px: f64) -> String {
    format!("perspective({perspective_px}px) rotateY({rotation_deg}deg) translateZ(0)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_tx_from_2d_matrix() {
        assert_eq!(parse_translate_x("matrix(1, 0, 0, 1, -1520.5, 0)"), Some(-1520.5));
    }

    #[test]
    fn reads_tx_from_3d_matrix() {
        let value = "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 240, 0, 0, 1)";
        assert_eq!(parse_translate_x(value), Some(240.0));
    }

    #[test]
    fn unreadable_values_fall_back_to_zero() {
        assert_eq!(rendered_translate_x(Some("none")), 0.0);
        assert_eq!(rendered_translate_x(Some("matrix(1, 0, 0, 1)")), 0.0);
        assert_eq!(rendered_translate_x(Some("matrix(1, 0, 0, 1, abc, 0)")), 0.0);
        assert_eq!(rendered_translate_x(Some("translate3d(12px, 0, 0)")), 0.0);
        assert_eq!(rendered_translate_x(None), 0.0);
    }

    #[test]
    fn formats_track_and_card_transforms() {
        assert_eq!(translate3d(-1520.0), "translate3d(-1520px, 0, 0)");
        assert_eq!(translate3d(12.5), "translate3d(12.5px, 0, 0)");
        assert_eq!(
            card_rotation(-8.0, 1200.0),
            "perspective(1200px) rotateY(-8deg) translateZ(0)"
        );
    }
}
