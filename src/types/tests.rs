//! Unit tests for argument validation

use super::*;
use crate::error::ErrorKind;
use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};

#[cfg(test)]
mod season_tests {
    use super::*;

    #[test]
    fn test_four_digit_years_accepted() {
        for year in ["2018", "1999", "0000"] {
            let season: Season = year.parse().unwrap();
            assert_eq!(season.as_str(), year);
            assert_eq!(season.to_string(), year);
        }
    }

    #[test]
    fn test_other_strings_rejected() {
        for year in ["18", "20199", "abcd", "", " 2018", "２０１８"] {
            let err = year.parse::<Season>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgumentValue, "{year:?}");
            assert_eq!(err.param(), Some("season"));
        }
    }

    #[test]
    fn test_current_season_is_valid() {
        let current = Season::current();
        assert_eq!(current.as_str().parse::<Season>().unwrap(), current);
        assert_eq!(Season::default(), current);
    }

    #[test]
    fn test_season_from_json() {
        let season: Season = json!("2021").into_arg().unwrap();
        assert_eq!(season.as_str(), "2021");

        let err = <Value as Argument<Season>>::into_arg(json!(2021)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgumentType);
    }

    #[test]
    fn test_season_serde_validates() {
        let season: Season = serde_json::from_value(json!("2017")).unwrap();
        assert_eq!(serde_json::to_value(&season).unwrap(), json!("2017"));
        assert!(serde_json::from_value::<Season>(json!("17")).is_err());
    }
}

#[cfg(test)]
mod group_tests {
    use super::*;

    #[test]
    fn test_exactly_three_groups() {
        for group in StatGroup::ALL {
            assert_eq!(group.as_str().parse::<StatGroup>().unwrap(), group);
        }
        for bad in ["batting", "HITTING", "hitting ", "running"] {
            let err = bad.parse::<StatGroup>().unwrap_err();
            assert_eq!(err.code(), "INVALID_TYPE");
        }
    }

    #[test]
    fn test_presence() {
        assert!(!<&str as Argument<StatGroup>>::is_present(&""));
        assert!(!<Option<&str> as Argument<StatGroup>>::is_present(&None));
        let err = <Option<&str> as Argument<StatGroup>>::into_arg(None).unwrap_err();
        assert_eq!(err.code(), "NO_TYPE_GIVEN");
        assert!(<Option<&str> as Argument<Season>>::is_omitted(&None));
        assert!(!<Option<&str> as Argument<Season>>::is_omitted(&Some("2018")));
        assert!(!<Value as Argument<StatGroup>>::is_present(&json!(null)));
        assert!(!<Value as Argument<StatGroup>>::is_present(&json!(false)));
        assert!(!<Value as Argument<StatGroup>>::is_present(&json!(0)));
        assert!(<Value as Argument<StatGroup>>::is_present(&json!(3)));
        assert!(<StatGroup as Argument<StatGroup>>::is_present(&StatGroup::Hitting));
    }

    #[test]
    fn test_group_from_json() {
        let group: StatGroup = json!("fielding").into_arg().unwrap();
        assert_eq!(group, StatGroup::Fielding);

        let err = <Value as Argument<StatGroup>>::into_arg(json!(["hitting"])).unwrap_err();
        assert_eq!(err.code(), "TYPE_NOT_STRING");
    }

    #[test]
    fn test_group_serde_lowercase() {
        assert_eq!(serde_json::to_value(StatGroup::Pitching).unwrap(), json!("pitching"));
    }
}

#[cfg(test)]
mod id_tests {
    use super::*;

    #[test]
    fn test_native_integers() {
        let id: PlayerId = 660271u64.into_arg().unwrap();
        assert_eq!(id, PlayerId::new(660271));
        let id: PlayerId = 545361u32.into_arg().unwrap();
        assert_eq!(id.as_u64(), 545361);
        let pk: GamePk = 717465i64.into_arg().unwrap();
        assert_eq!(pk.to_string(), "717465");
    }

    #[test]
    fn test_negative_is_invalid_value() {
        let err = <i32 as Argument<PlayerId>>::into_arg(-5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgumentValue);
        assert_eq!(err.code(), "INVALID_ID");
    }

    #[test]
    fn test_json_ids() {
        let id: PlayerId = json!(1).into_arg().unwrap();
        assert_eq!(id.as_u64(), 1);

        let err = <Value as Argument<GamePk>>::into_arg(json!("1")).unwrap_err();
        assert_eq!(err.code(), "GAME_PK_NOT_NUMBER");

        let err = <Value as Argument<PlayerId>>::into_arg(json!(1.5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgumentValue);

        let err = <Value as Argument<PlayerId>>::into_arg(json!(null)).unwrap_err();
        assert_eq!(err.code(), "ID_NOT_NUMBER");
    }

    #[test]
    fn test_omitted_id_is_a_type_error() {
        let err = <Option<u64> as Argument<PlayerId>>::into_arg(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgumentType);
        assert_eq!(err.code(), "ID_NOT_NUMBER");

        let err = <Option<u64> as Argument<GamePk>>::into_arg(None).unwrap_err();
        assert_eq!(err.code(), "GAME_PK_NOT_NUMBER");

        let id = <Option<u64> as Argument<PlayerId>>::into_arg(Some(7)).unwrap();
        assert_eq!(id.as_u64(), 7);
    }
}

#[cfg(test)]
mod updated_since_tests {
    use super::*;

    #[test]
    fn test_query_format() {
        let at = Utc.with_ymd_and_hms(2022, 3, 4, 5, 6, 7).unwrap();
        let since = UpdatedSince::at(at, Utc::now()).unwrap();
        assert_eq!(since.to_query(), "2022-03-04T05:06:07.000Z");
        assert_eq!(since.as_datetime(), at);
    }

    #[test]
    fn test_now_is_accepted_and_later_is_not() {
        let now = Utc::now();
        assert!(UpdatedSince::at(now, now).is_ok());

        let err = UpdatedSince::at(now + Duration::milliseconds(1), now).unwrap_err();
        assert_eq!(err.code(), "DATE_IN_FUTURE");
        assert_eq!(err.to_string(), "The updatedSince must be in the past");
    }

    #[test]
    fn test_from_json_string() {
        let since: UpdatedSince = json!("2021-07-01T00:00:00+02:00").into_arg().unwrap();
        assert_eq!(since.to_query(), "2021-06-30T22:00:00.000Z");

        let err = <Value as Argument<UpdatedSince>>::into_arg(json!(1625097600)).unwrap_err();
        assert_eq!(err.code(), "DATE_NOT_DATE");
    }
}

#[cfg(test)]
mod keyword_tests {
    use super::*;

    #[test]
    fn test_any_string_is_a_keyword() {
        let keyword: Keyword = "".into_arg().unwrap();
        assert_eq!(keyword.as_str(), "");
        let keyword: Keyword = String::from("Trout").into_arg().unwrap();
        assert_eq!(keyword.to_string(), "Trout");
    }

    #[test]
    fn test_non_string_json_rejected() {
        let err = <Value as Argument<Keyword>>::into_arg(json!({ "name": "Trout" })).unwrap_err();
        assert_eq!(err.code(), "KEYWORD_NOT_STRING");

        let err = <Option<&str> as Argument<Keyword>>::into_arg(None).unwrap_err();
        assert_eq!(err.code(), "KEYWORD_NOT_STRING");
    }
}
