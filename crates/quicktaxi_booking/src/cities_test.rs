#[cfg(test)]
mod tests {
    use crate::cities::{match_cities, CITIES};

    #[test]
    fn test_matching_ignores_case() {
        assert_eq!(match_cities("paris", 5), vec!["Paris, France"]);
        assert_eq!(match_cities("PARIS", 5), vec!["Paris, France"]);
        assert_eq!(match_cities("aRiS", 5), vec!["Paris, France"]);
    }

    #[test]
    fn test_matches_anywhere_in_the_name_in_list_order() {
        assert_eq!(
            match_cities("on", 5),
            vec![
                "Lyon, France",
                "Montpellier, France",
                "Toulon, France",
                "Dijon, France"
            ]
        );
    }

    #[test]
    fn test_limit_caps_the_suggestions() {
        // Every entry ends in "France", so this matches all twenty
        assert_eq!(match_cities("France", 5), CITIES[..5].to_vec());
        assert_eq!(match_cities("france", 3), CITIES[..3].to_vec());
    }

    #[test]
    fn test_empty_query_suggests_the_head_of_the_list() {
        assert_eq!(match_cities("", 5), CITIES[..5].to_vec());
    }

    #[test]
    fn test_unknown_city_suggests_nothing() {
        assert!(match_cities("Berlin", 5).is_empty());
    }

    #[test]
    fn test_accented_names_match_their_accented_query() {
        assert_eq!(match_cities("étienne", 5), vec!["Saint-Étienne, France"]);
        assert_eq!(match_cities("nîmes", 5), vec!["Nîmes, France"]);
    }
}
