//! ロケールを考慮した文字列比較
//!
//! ブラウザの `localeCompare` と同じ並びになるよう、3段階で比較する。
//!
//! 1. 一次: アクセント・大文字小文字を無視した基底文字
//! 2. 二次: アクセントなし < アクセントあり
//! 3. 三次: 小文字 < 大文字
//!
//! すべて等しい場合は生の文字列で決着させ、全順序を保つ。

use std::cmp::Ordering;

/// ロケールを考慮して2つの文字列を比較
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| accents(a).cmp(accents(b)))
        .then_with(|| cases(a).cmp(cases(b)))
        .then_with(|| a.cmp(b))
}

fn primary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| fold_accent(c).0)
}

fn accents(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| fold_accent(c).1)
}

fn cases(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

/// ラテン文字のアクセントを落とした基底文字と、アクセントの有無
fn fold_accent(c: char) -> (char, bool) {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => return (other, false),
    };
    (base, true)
}
