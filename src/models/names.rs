/// Anything that can be listed by name in the detail document.
pub trait DisplayName {
    fn display_name(&self) -> &str;
}

/// Join display names with `", "`, keeping input order.
pub fn join_names<T: DisplayName>(items: &[T]) -> String {
    items
        .iter()
        .map(DisplayName::display_name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Genre, Studio};

    #[test]
    fn test_join_names_keeps_order() {
        let genres = vec![
            Genre {
                name: "Drama".to_string(),
            },
            Genre {
                name: "Adventure".to_string(),
            },
        ];
        assert_eq!(join_names(&genres), "Drama, Adventure");
    }

    #[test]
    fn test_join_names_empty_and_single() {
        let none: Vec<Studio> = Vec::new();
        assert_eq!(join_names(&none), "");

        let one = vec![Studio {
            id: 11,
            name: "Madhouse".to_string(),
        }];
        assert_eq!(join_names(&one), "Madhouse");
    }
}
