use ::core::str::FromStr;
use float_cmp::approx_eq;
use rstest::*;
use speakerid::{
    identify_speaker, CountTable, Error, FrequencyMap, FrequencyMapConfig, MarkovModel, Speaker,
    SpeakerIdentifier, StdCountTable, TableBackend,
};
use strum::IntoEnumIterator;

const SPEECH_A: &str = "We shall go on to the end, we shall fight in France, we shall fight \
    on the seas and oceans, we shall fight with growing confidence and growing strength in \
    the air, we shall defend our Island, whatever the cost may be, we shall fight on the \
    beaches, we shall fight on the landing grounds, we shall fight in the fields and in the \
    streets, we shall fight in the hills; we shall never surrender.";
const SPEECH_B: &str = "I have a dream that one day this nation will rise up and live out \
    the true meaning of its creed: that all men are created equal. I have a dream that my \
    four little children will one day live in a nation where they will not be judged by \
    the color of their skin but by the content of their character.";

#[rstest(
    expected,
    unknown,
    case(Speaker::A, "we shall fight on the beaches"),
    case(Speaker::A, "we shall never surrender"),
    case(Speaker::B, "I have a dream"),
    case(Speaker::B, "one day live in a nation")
)]
fn test_identify_quotes(expected: Speaker, unknown: &str) {
    for backend in TableBackend::iter() {
        for order in [2, 3, 4] {
            let res = identify_speaker(SPEECH_A, SPEECH_B, unknown, order, backend).unwrap();
            assert_eq!(res.verdict, expected, "order {order}, backend {backend}");
            assert!(res.score_a < 0.0 && res.score_b < 0.0);
        }
    }
}

#[test]
fn test_backend_selection_from_name() {
    let unknown = "the content of their character";
    let results: Vec<_> = ["hashtable", "dict"]
        .into_iter()
        .map(|name| {
            let backend = TableBackend::from_str(name).unwrap();
            SpeakerIdentifier::new(3)
                .backend(backend)
                .identify(SPEECH_A, SPEECH_B, unknown)
                .unwrap()
        })
        .collect();
    assert_eq!(results[0], results[1]);
}

#[test]
fn test_model_alphabet_from_training_text() {
    let model = MarkovModel::<FrequencyMap>::train(2, "abcabc").unwrap();
    assert_eq!(model.alphabet_size(), 3);
    // scoring a text with other chars doesn't change it
    let _ = model.log_probability("xyzw");
    assert_eq!(model.alphabet_size(), 3);
    assert_eq!(model.order(), 2);
}

#[test]
fn test_model_over_custom_table() {
    let config = FrequencyMapConfig::new().capacity(2).load_factor(0.9).growth_factor(3);
    let table = FrequencyMap::with_config(config).unwrap();
    let model = MarkovModel::train_with(3, SPEECH_A, table).unwrap();
    let std = MarkovModel::<StdCountTable>::train(3, SPEECH_A).unwrap();

    assert!(model.table().capacity() > 2);
    assert_eq!(model.table().len(), std.table().len());

    let text = "we shall defend";
    assert!(approx_eq!(
        f64,
        model.log_probability(text),
        std.log_probability(text),
        epsilon = 1e-9
    ));
}

#[test]
fn test_frequency_map_growth_round_trip() {
    let mut map = FrequencyMap::new();
    let words: Vec<&str> = SPEECH_B.split_whitespace().collect();
    for (i, word) in words.iter().enumerate() {
        map.set(word, i);
    }
    let capacity = map.capacity();
    for (i, word) in words.iter().enumerate() {
        map.set(&format!("{word}#{i}"), i);
    }
    assert!(map.capacity() > capacity);

    for (i, word) in words.iter().enumerate() {
        assert_eq!(map.get(&format!("{word}#{i}")), i);
    }
}

#[test]
fn test_remove_absent_key() {
    let mut map = FrequencyMap::new();
    map.set("present", 1);
    assert!(matches!(map.remove("absent"), Err(Error::NotFound(k)) if k == "absent"));
    assert_eq!(map.len(), 1);
}

#[test]
fn test_unknown_text_required() {
    let res = identify_speaker(SPEECH_A, SPEECH_B, "", 2, TableBackend::Dict);
    assert!(matches!(res, Err(Error::InvalidArgument(_))));
}
