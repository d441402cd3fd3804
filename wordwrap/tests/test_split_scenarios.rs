// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Line breaks for prose and for text that is heavy on multi byte grapheme clusters:
//! emoji sequences, combining marks, and complex scripts.

use r3bl_wordwrap::{LineStatus, SplitConfig, WrapError, assert_eq2, split, split_with_config,
                    wrap, wrap_with_config};
use test_case::test_case;

#[test]
fn test_break_on_whitespace_or_at_the_limit() {
    assert_eq2!(
        split("asdasd asd asdasd", 4).unwrap(),
        vec!["asda", "sd ", "asd ", "asda", "sd"]
    );
}

#[test]
fn test_cluster_that_fits_stays_whole() {
    assert_eq2!(split("Hello 👋🏽 world", 20).unwrap(), vec!["Hello 👋🏽 ", "world"]);
}

#[test]
fn test_oversized_cluster_is_an_error() {
    assert_eq2!(
        split("👩‍👩‍👧‍👧", 20),
        Err(WrapError::OversizedCluster {
            byte_offset: 0,
            cluster_bytes: 25,
            byte_limit: 20,
        })
    );
}

#[test]
fn test_short_input_is_one_line() {
    assert_eq2!(wrap("Short", 20).unwrap(), "Short");
}

#[test]
fn test_bisection_when_the_cluster_fits() {
    // The 25 byte family emoji fits in 30 bytes, so nothing gets bisected. It just
    // moves to its own line.
    let config = SplitConfig::new(30).with_allow_cluster_bisection(true);
    assert_eq2!(
        config.split("abcdefgh👩‍👩‍👧‍👧ijklmn").collect_lines().unwrap(),
        vec!["abcdefgh", "👩‍👩‍👧‍👧ijklm", "n"]
    );
}

#[test]
fn test_bisection_splits_oversized_cluster_across_lines() {
    let input = "abcdefgh👩‍👩‍👧‍👧ijklmn";
    let config = SplitConfig::new(20).with_allow_cluster_bisection(true);
    let lines = split_with_config(input, config).collect::<Vec<_>>();

    // The family emoji is cut after its second woman and her zero width joiner stays on
    // the first line. Each piece is made of whole scalar values.
    assert_eq2!(
        lines.iter().map(|line| line.content).collect::<Vec<_>>(),
        vec!["abcdefgh👩\u{200d}👩", "\u{200d}👧\u{200d}👧ijklmn"]
    );
    assert!(lines.iter().all(|line| line.status == LineStatus::Ok));
    assert!(lines.iter().all(|line| line.content.len() <= 20));
    assert_eq2!(lines.iter().map(|line| line.content).collect::<String>(), input);
}

#[test_case(
    "asdasd asd asdasd",
    4,
    &["asda", "sd ", "asd ", "asda", "sd"];
    "break on whitespace, or exactly at the limit"
)]
#[test_case(
    "𠜎𠜱00𠝹𠱓𠱸𠲖𠳏𠳕",
    9,
    &["𠜎𠜱0", "0𠝹𠱓", "𠱸𠲖", "𠳏𠳕"];
    "four byte cjk extension b ideographs"
)]
#[test_case(
    "If any earl, baron, or other person that holds lands directly of the Crown, for military service, shall die, and at his death his heir shall be of full age and owe a 'relief', the heir shall have his inheritance on payment of the ancient scale of 'relief'.",
    60,
    &["If any earl, baron, or other person that holds lands ", "directly of the Crown, for military service, shall die, and ", "at his death his heir shall be of full age and owe a ", "'relief', the heir shall have his inheritance on payment of ", "the ancient scale of 'relief'."];
    "english prose"
)]
#[test_case(
    "クラウンの直接土地を保持している任意の伯爵、男爵、または他の人は、兵役のために、死ぬ、と彼の死で彼の後継者は成年であることと「救済」を借りなければならない場合は、相続人は、支払いの彼の継承をもたなければなりません「救済」の古代規模の。",
    60,
    &["クラウンの直接土地を保持している任意の伯", "爵、男爵、または他の人は、兵役のために、", "死ぬ、と彼の死で彼の後継者は成年であるこ", "とと「救済」を借りなければならない場合は", "、相続人は、支払いの彼の継承をもたなけれ", "ばなりません「救済」の古代規模の。"];
    "japanese, no whitespace"
)]
#[test_case(
    "크라운 의 직접 토지 를 보유하고 있는 백작 , 남작 , 또는 다른 사람이 군 복무 를 위해 죽을 것이요, 그의 죽음 에 그의 후계자 가 전체 연령 하고' 구호 '을 빚을 해야 하는 경우, 상속인 이 지불 에 대한 자신의 상속을 가져야한다 ' 구호 ' 의 고대 규모의 ",
    60,
    &["크라운 의 직접 토지 를 보유하고 있는 백작 ", ", 남작 , 또는 다른 사람이 군 복무 를 위해 ", "죽을 것이요, 그의 죽음 에 그의 후계자 가 ", "전체 연령 하고' 구호 '을 빚을 해야 하는 ", "경우, 상속인 이 지불 에 대한 자신의 상속을 ", "가져야한다 ' 구호 ' 의 고대 규모의 "];
    "korean with spaces"
)]
#[test_case(
    "Hello 👩‍👩‍👧‍👧 world",
    32,
    &["Hello 👩‍👩‍👧‍👧 ", "world"];
    "zwj family emoji"
)]
#[test_case(
    "Test 🧑‍🎄 emoji here",
    20,
    &["Test 🧑‍🎄 ", "emoji here"];
    "zwj person with tree"
)]
#[test_case(
    "abcdefgh👩‍👩‍👧‍👧ijklmn",
    30,
    &["abcdefgh", "👩‍👩‍👧‍👧ijklm", "n"];
    "zwj emoji in a long word"
)]
#[test_case(
    "🧑‍🎄 and 👩‍👩‍👧‍👧 test",
    30,
    &["🧑‍🎄 and ", "👩‍👩‍👧‍👧 ", "test"];
    "multiple zwj emoji"
)]
#[test_case(
    "👩‍👩‍👧‍👧 family",
    30,
    &["👩‍👩‍👧‍👧 ", "family"];
    "zwj emoji at the start"
)]
#[test_case(
    "family 👩‍👩‍👧‍👧",
    30,
    &["family ", "👩‍👩‍👧‍👧"];
    "zwj emoji at the end"
)]
#[test_case(
    "नमस्ते क्षि test",
    20,
    &["नमस्ते ", "क्षि test"];
    "devanagari conjuncts"
)]
#[test_case(
    "श्री त्र द्ध test",
    20,
    &["श्री ", "त्र द्ध ", "test"];
    "devanagari multiple conjuncts"
)]
#[test_case(
    "السلام عليكم مُحَمَّد test",
    25,
    &["السلام عليكم ", "مُحَمَّد test"];
    "arabic with diacritics"
)]
#[test_case(
    "שָׁלוֹם test word",
    20,
    &["שָׁלוֹם test ", "word"];
    "hebrew with points"
)]
#[test_case(
    "สวัสดี ก้า test",
    20,
    &["สวัสดี ", "ก้า test"];
    "thai with tone marks"
)]
#[test_case(
    "Hello 👋🏽 👍🏿 world",
    20,
    &["Hello 👋🏽 ", "👍🏿 world"];
    "skin tone modifiers"
)]
#[test_case(
    "Test 👩‍💻 code",
    20,
    &["Test 👩‍💻 ", "code"];
    "zwj profession emoji"
)]
#[test_case(
    "Numbers 1️⃣ 2️⃣ 3️⃣ here",
    20,
    &["Numbers 1️⃣ ", "2️⃣ 3️⃣ ", "here"];
    "keycap sequences"
)]
#[test_case(
    "Hello 🇺🇸 test",
    20,
    &["Hello 🇺🇸 test"];
    "regional indicator flag"
)]
#[test_case(
    "বাংলা ক্ষ test",
    20,
    &["বাংলা ", "ক্ষ test"];
    "bengali conjunct"
)]
#[test_case(
    "தமிழ் நீ கூ test",
    20,
    &["தமிழ் ", "நீ கூ test"];
    "tamil vowel signs"
)]
#[test_case(
    "Tiếng Việt ệ test",
    20,
    &["Tiếng Việt ệ ", "test"];
    "vietnamese stacked marks"
)]
fn test_split_multilingual(input: &str, byte_limit: usize, expected: &[&str]) {
    let actual = split(input, byte_limit).unwrap();
    assert_eq2!(actual, expected.to_vec());
    assert_eq2!(actual.concat(), input);
}

#[test_case("👩‍👩‍👧‍👧", 20, 0, 25; "family emoji")]
#[test_case("🧑‍🎄", 8, 0, 11; "person with tree emoji")]
#[test_case("test👩‍👩‍👧‍👧end", 20, 4, 25; "cluster inside a word")]
#[test_case("क्", 5, 0, 6; "devanagari single cluster")]
#[test_case("test नी", 5, 5, 6; "devanagari cluster at the end")]
#[test_case("ก้", 5, 0, 6; "thai single cluster")]
#[test_case("🏴\u{e0067}\u{e0062}\u{e0065}\u{e006e}\u{e0067}\u{e007f}", 25, 0, 28; "tag sequence flag")]
#[test_case("test 👋🏽", 7, 5, 8; "skin tone emoji at the end")]
#[test_case("1️⃣", 6, 0, 7; "keycap sequence")]
#[test_case("ệ", 2, 0, 3; "vietnamese stacked marks")]
fn test_split_oversized_cluster(
    input: &str,
    byte_limit: usize,
    byte_offset: usize,
    cluster_bytes: usize,
) {
    let expected = WrapError::OversizedCluster {
        byte_offset,
        cluster_bytes,
        byte_limit,
    };
    assert_eq2!(split(input, byte_limit), Err(expected.clone()));
    assert_eq2!(wrap(input, byte_limit), Err(expected));
}

#[test_case("Hello world this is a test", 10, "Hello \nworld \nthis is a \ntest"; "simple")]
#[test_case(
    "If any earl, baron, or other person that holds lands directly of the Crown",
    30,
    "If any earl, baron, or other \nperson that holds lands \ndirectly of the Crown";
    "english prose"
)]
#[test_case(
    "クラウンの直接土地を保持している任意の伯爵、男爵",
    30,
    "クラウンの直接土地を\n保持している任意の伯\n爵、男爵";
    "japanese"
)]
#[test_case("Hello 👋🏽 world", 15, "Hello 👋🏽 \nworld"; "skin tone emoji")]
#[test_case("Short", 20, "Short"; "single line")]
#[test_case("🧑‍🎄 and 👩‍👩‍👧‍👧 test", 30, "🧑‍🎄 and \n👩‍👩‍👧‍👧 \ntest"; "multiple zwj emoji")]
fn test_wrap(input: &str, byte_limit: usize, expected: &str) {
    assert_eq2!(wrap(input, byte_limit).unwrap(), expected);
}

#[test]
fn test_wrap_single_character_too_large() {
    assert!(wrap("し", 2).is_err());
}

#[test]
fn test_wrap_with_trim_and_continue() {
    let config = SplitConfig::new(10)
        .with_trim_trailing_whitespace(true)
        .with_continue_on_error(true);
    assert_eq2!(wrap_with_config("Hello world  test", config).unwrap(), "Hello\nworld\ntest");
}
