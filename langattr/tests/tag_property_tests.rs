use langattr::{
    base_language, clean_lang_attr, get_locale_parts, get_text_direction, is_valid_lang,
};
use proptest::{prelude::*, sample::select};

const BASE_LANGUAGES: &[&str] = &[
    "en", "ar", "he", "fa", "ku", "pa", "zh", "sr", "ur", "ks", "yi", "tlh",
];
const SCRIPTS: &[&str] = &["Latn", "Arab", "Hebr", "Cyrl", "Hant"];
const REGIONS: &[&str] = &["US", "IQ", "IL", "PK", "419"];

fn valid_tag_strategy() -> impl Strategy<Value = String> {
    let language = proptest::string::string_regex("[a-zA-Z]{2,3}").expect("valid language regex");
    let script = proptest::option::of(
        proptest::string::string_regex("[a-zA-Z]{4}").expect("valid script regex"),
    );
    let region = proptest::option::of(
        proptest::string::string_regex("[a-zA-Z]{2}|[0-9]{3}").expect("valid region regex"),
    );
    let extensions = prop::collection::vec(
        proptest::string::string_regex("[a-zA-Z0-9]{1,8}").expect("valid extension regex"),
        0..3,
    );

    (language, script, region, extensions).prop_map(|(language, script, region, extensions)| {
        let mut parts = vec![language];
        parts.extend(script);
        parts.extend(region);
        parts.extend(extensions);
        parts.join("-")
    })
}

fn extension_strategy() -> impl Strategy<Value = String> {
    let unicode = prop::collection::vec(
        proptest::string::string_regex("[a-z]{2}-[a-z0-9]{3,8}").expect("valid keyword regex"),
        1..3,
    )
    .prop_map(|keywords| format!("u-{}", keywords.join("-")));
    let other = (
        proptest::string::string_regex("[a-su-wyz]").expect("valid singleton regex"),
        prop::collection::vec(
            proptest::string::string_regex("[a-z0-9]{2,8}").expect("valid subtag regex"),
            1..3,
        ),
    )
        .prop_map(|(singleton, subtags)| format!("{}-{}", singleton, subtags.join("-")));
    let private = prop::collection::vec(
        proptest::string::string_regex("[a-z0-9]{1,8}").expect("valid private-use regex"),
        1..3,
    )
    .prop_map(|subtags| format!("x-{}", subtags.join("-")));

    prop_oneof![unicode, other, private]
}

/// `(base, base-with-extension)` pairs, the extended tag in random case.
fn extended_tag_strategy() -> impl Strategy<Value = (String, String)> {
    (
        select(BASE_LANGUAGES),
        proptest::option::of(select(SCRIPTS)),
        proptest::option::of(select(REGIONS)),
        extension_strategy(),
        any::<bool>(),
    )
        .prop_map(|(language, script, region, extension, upper)| {
            let mut parts = vec![language.to_string()];
            parts.extend(script.map(str::to_string));
            parts.extend(region.map(str::to_string));
            let base = parts.join("-");
            let tag = format!("{}-{}", base, extension);
            let tag = if upper { tag.to_uppercase() } else { tag };
            (base, tag)
        })
}

fn loose_tag_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z]{1,4}([-_][a-zA-Z0-9]{1,8}){0,3}")
        .expect("valid loose tag regex")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn clean_lang_attr_is_idempotent(tag in valid_tag_strategy()) {
        prop_assume!(is_valid_lang(Some(&tag)));
        let once = clean_lang_attr(Some(&tag));
        prop_assert_eq!(clean_lang_attr(Some(&once)), once);
    }

    #[test]
    fn normalization_preserves_locale_parts(tag in valid_tag_strategy()) {
        prop_assume!(is_valid_lang(Some(&tag)));
        let cleaned = clean_lang_attr(Some(&tag));
        prop_assert_eq!(get_locale_parts(&cleaned), get_locale_parts(&tag));
    }

    #[test]
    fn normalized_valid_tags_stay_valid(tag in valid_tag_strategy()) {
        prop_assume!(is_valid_lang(Some(&tag)));
        prop_assert!(is_valid_lang(Some(&clean_lang_attr(Some(&tag)))));
    }

    #[test]
    fn extensions_do_not_change_parts_or_direction((base, tag) in extended_tag_strategy()) {
        prop_assert_eq!(get_locale_parts(&tag), get_locale_parts(&base));
        prop_assert_eq!(get_text_direction(&tag), get_text_direction(&base));
    }

    #[test]
    fn normalization_preserves_parts_of_extended_tags((_base, tag) in extended_tag_strategy()) {
        let cleaned = clean_lang_attr(Some(&tag));
        prop_assert_eq!(clean_lang_attr(Some(&cleaned)), cleaned.clone());
        prop_assert_eq!(get_locale_parts(&cleaned), get_locale_parts(&tag));
        prop_assert_eq!(get_text_direction(&cleaned), get_text_direction(&tag));
    }

    #[test]
    fn direction_ignores_case(tag in loose_tag_strategy()) {
        prop_assert_eq!(get_text_direction(&tag), get_text_direction(&tag.to_uppercase()));
        prop_assert_eq!(get_text_direction(&tag), get_text_direction(&tag.to_lowercase()));
    }

    #[test]
    fn validity_ignores_case(tag in loose_tag_strategy()) {
        prop_assert_eq!(is_valid_lang(Some(&tag)), is_valid_lang(Some(&tag.to_uppercase())));
    }

    #[test]
    fn direction_ignores_surrounding_whitespace(tag in loose_tag_strategy()) {
        let padded = format!("  {}\t", tag);
        prop_assert_eq!(get_text_direction(&padded), get_text_direction(&tag));
    }

    #[test]
    fn base_language_is_prefix_of_clean_output(tag in valid_tag_strategy()) {
        let cleaned = clean_lang_attr(Some(&tag));
        prop_assert_eq!(base_language(&cleaned), base_language(&tag).to_lowercase());
    }

    #[test]
    fn functions_are_total(input in "\\PC{0,48}") {
        let _ = clean_lang_attr(Some(&input));
        let _ = base_language(&input);
        let _ = is_valid_lang(Some(&input));
        let _ = get_locale_parts(&input);
        let _ = get_text_direction(&input);
    }
}
