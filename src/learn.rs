//! 学習コンテンツ（解説カードとクイズ）

/// 解説カード
#[derive(Debug, Clone, Copy)]
pub struct InfoCard {
    pub title: &'static str,
    pub content: &'static str,
}

/// クイズの設問
#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct: &'static str,
}

impl QuizQuestion {
    /// 正解の選択肢番号（0始まり）
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct)
    }
}

pub const INFO_CARDS: [InfoCard; 3] = [
    InfoCard {
        title: "What is Sustainable Fashion?",
        content: "Sustainable fashion refers to clothing, shoes, and accessories that are manufactured, marketed, and used in the most sustainable manner possible, taking into account both environmental and socio-economic aspects.",
    },
    InfoCard {
        title: "Top Eco Certifications",
        content: "Fair Trade ensures fair wages and ethical treatment of workers. GOTS (Global Organic Textile Standard) certifies organic fibers. B Corp certification proves a company meets high social and environmental standards.",
    },
    InfoCard {
        title: "Tips for Ethical Shopping",
        content: "Look for transparent supply chains, check for certifications, choose quality over quantity, support local artisans, buy second-hand when possible, and research brands before purchasing.",
    },
];

pub const QUIZ: [QuizQuestion; 3] = [
    QuizQuestion {
        question: "What percentage of clothing ends up in landfills each year?",
        options: &["20%", "40%", "60%", "85%"],
        correct: "85%",
    },
    QuizQuestion {
        question: "Which material requires the most water to produce?",
        options: &["Cotton", "Polyester", "Linen", "Hemp"],
        correct: "Cotton",
    },
    QuizQuestion {
        question: "What does GOTS certification stand for?",
        options: &[
            "Green Organic Trade System",
            "Global Organic Textile Standard",
            "General Organic Testing Service",
            "Global Organization for Textile Safety",
        ],
        correct: "Global Organic Textile Standard",
    },
];

/// 1問ぶんの採点結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResult {
    pub question: usize,
    /// 選んだ選択肢番号（未回答なら None）
    pub chosen: Option<usize>,
    pub correct: bool,
}

/// 採点結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub answers: Vec<AnswerResult>,
}

impl QuizResult {
    pub fn score(&self) -> usize {
        self.answers.iter().filter(|a| a.correct).count()
    }

    pub fn total(&self) -> usize {
        self.answers.len()
    }
}

/// 選んだ選択肢番号（0始まり）で採点する
///
/// 足りない回答は未回答、範囲外の番号は不正解として扱う。
pub fn grade(questions: &[QuizQuestion], chosen: &[Option<usize>]) -> QuizResult {
    let answers = questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let pick = chosen.get(i).copied().flatten();
            let correct = pick
                .and_then(|idx| q.options.get(idx))
                .is_some_and(|option| *option == q.correct);
            AnswerResult {
                question: i,
                chosen: pick,
                correct,
            }
        })
        .collect();
    QuizResult { answers }
}

/// "4,1,2" のような 1始まりの回答リストを解釈する
///
/// 空要素や "-" は未回答。
pub fn parse_answers(input: &str) -> Result<Vec<Option<usize>>, String> {
    input
        .split(',')
        .map(str::trim)
        .map(|part| {
            if part.is_empty() || part == "-" {
                return Ok(None);
            }
            match part.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(Some(n - 1)),
                _ => Err(format!("Invalid answer '{}': expected an option number", part)),
            }
        })
        .collect()
}
