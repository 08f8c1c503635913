use crate::types::{LabelSet, Polygon, ToothClass};
use log::warn;

/// Parses one annotation file into a [`LabelSet`]
///
/// Input lines follow the normalized-coordinate convention: a class-id
/// token followed by floats in [0, 1] — either a flat polygon (even
/// count ≥ 6) or a 4-number bounding box (center-x, center-y, width,
/// height). Lines for unmapped class ids are skipped silently; they are
/// irrelevant data in a shared annotation format, not an error.
///
/// There is no fatal path: malformed lines are dropped with a warning
/// and an empty or fully malformed input yields an all-absent set.
pub fn parse(label_text: &str) -> LabelSet {
    let mut set = LabelSet::new();

    for (idx, line) in label_text.lines().enumerate() {
        let line_no = idx + 1;
        let mut tokens = line.split_whitespace();

        let Some(class_token) = tokens.next() else {
            continue; // blank line
        };
        let Some(tooth) = class_token
            .parse::<u32>()
            .ok()
            .and_then(ToothClass::from_class_id)
        else {
            continue;
        };

        let mut nums = Vec::new();
        let mut bad_token = false;
        for token in tokens {
            match token.parse::<f64>() {
                Ok(v) => nums.push(v),
                Err(_) => {
                    bad_token = true;
                    break;
                }
            }
        }
        if bad_token {
            warn!(
                "tooth {}: line {} has a non-numeric coordinate token, dropping line",
                tooth, line_no
            );
            continue;
        }

        let polygon = if nums.len() == 4 {
            // Degenerate bbox form, expanded to its corner rectangle
            Some(Polygon::from_bbox(nums[0], nums[1], nums[2], nums[3]))
        } else {
            Polygon::from_flat(&nums)
        };

        match polygon {
            Some(p) => {
                if !set.insert(tooth, p) {
                    warn!(
                        "tooth {}: line {} superseded by a more detailed candidate",
                        tooth, line_no
                    );
                }
            }
            None => warn!(
                "tooth {}: line {} has {} coordinate numbers (need 4 or an even count >= 6), dropping line",
                tooth,
                line_no,
                nums.len()
            ),
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn test_parse_simple_polygon() {
        let set = parse("0 0.1 0.2 0.3 0.4 0.5 0.6\n");
        let poly = set.get(ToothClass::UpperRight).unwrap();
        assert_eq!(poly.len(), 3);
        assert_eq!(poly.points()[0], Point::new(0.1, 0.2));
        assert!(set.get(ToothClass::UpperLeft).is_none());
    }

    #[test]
    fn test_parse_bbox_line_expands_to_rectangle() {
        let set = parse("2 0.5 0.5 0.2 0.2\n");
        let poly = set.get(ToothClass::LowerLeft).unwrap();
        assert_eq!(poly.len(), 4);
        assert_eq!(poly.points()[0], Point::new(0.4, 0.4));
        assert_eq!(poly.points()[2], Point::new(0.6, 0.6));
    }

    #[test]
    fn test_unknown_class_skipped_silently() {
        let set = parse("7 0.1 0.2 0.3 0.4 0.5 0.6\nx 0.1 0.2 0.3 0.4 0.5 0.6\n");
        assert!(set.is_empty());
    }

    #[test]
    fn test_malformed_lines_dropped() {
        // odd count, even count < 6, non-numeric token
        let set = parse("0 0.1 0.2 0.3\n1 0.1 0.2\n2 0.1 abc 0.3 0.4 0.5 0.6\n");
        assert!(set.is_empty());
    }

    #[test]
    fn test_retention_keeps_more_detailed_polygon() {
        let six = "1 0.1 0.2 0.3 0.4 0.5 0.6";
        let eight = "1 0.1 0.2 0.3 0.4 0.5 0.6 0.7 0.8";
        for text in [format!("{six}\n{eight}\n"), format!("{eight}\n{six}\n")] {
            let set = parse(&text);
            assert_eq!(set.get(ToothClass::UpperLeft).unwrap().len(), 4);
        }
    }

    #[test]
    fn test_bbox_never_replaces_equal_polygon() {
        let set = parse("3 0.1 0.2 0.3 0.4 0.5 0.6 0.7 0.8\n3 0.5 0.5 0.2 0.2\n");
        let poly = set.get(ToothClass::LowerRight).unwrap();
        assert_eq!(poly.points()[0], Point::new(0.1, 0.2));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "0 0.1 0.2 0.3 0.4 0.5 0.6\n3 0.5 0.5 0.2 0.2\nbad line\n";
        assert_eq!(parse(text), parse(text));
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n").is_empty());
    }
}
