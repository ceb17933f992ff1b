//! 템플릿 치환 유한 상태 기계
//!
//! `{index[,alignment][:format]}` 형식의 자리표시자를 인자로 치환합니다.
//! `{{`, `}}`는 중괄호 문자 그대로 출력됩니다.

use super::argument::Argument;
use super::particle::ParticleFormatter;
use crate::error::FormatError;

/// 자리표시자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatItem<'a> {
    pub index: usize,
    /// 양수: 오른쪽 정렬, 음수: 왼쪽 정렬
    pub alignment: Option<i32>,
    pub format: Option<&'a str>,
}

/// 템플릿 조각
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(String),
    Item(FormatItem<'a>),
}

/// FSM 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// 일반 문자
    Literal,
    /// '{' 직후
    OpenBrace { start: usize },
    /// 리터럴 중 '}' 직후
    CloseBrace { position: usize },
    /// 자리표시자 내부
    Item { start: usize },
}

/// 템플릿 스캐너
struct TemplateScanner<'a> {
    template: &'a str,
    state: State,
    literal: String,
    segments: Vec<Segment<'a>>,
}

impl<'a> TemplateScanner<'a> {
    fn new(template: &'a str) -> Self {
        Self {
            template,
            state: State::Literal,
            literal: String::new(),
            segments: Vec::new(),
        }
    }

    fn feed(&mut self, position: usize, c: char) -> Result<(), FormatError> {
        match self.state {
            State::Literal => match c {
                '{' => self.state = State::OpenBrace { start: position },
                '}' => self.state = State::CloseBrace { position },
                _ => self.literal.push(c),
            },
            State::OpenBrace { start } => {
                if c == '{' {
                    // 이스케이프된 '{'
                    self.literal.push('{');
                    self.state = State::Literal;
                } else {
                    self.flush_literal();
                    self.state = State::Item { start: start + 1 };
                    self.feed(position, c)?;
                }
            }
            State::CloseBrace { position: brace } => {
                if c != '}' {
                    return Err(malformed(brace, "짝이 없는 '}'"));
                }
                self.literal.push('}');
                self.state = State::Literal;
            }
            State::Item { start } => match c {
                '}' => {
                    let template = self.template;
                    let item = parse_item(&template[start..position], start)?;
                    self.segments.push(Segment::Item(item));
                    self.state = State::Literal;
                }
                '{' => return Err(malformed(position, "자리표시자 안의 '{'")),
                _ => {}
            },
        }
        Ok(())
    }

    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.segments.push(Segment::Literal(std::mem::take(&mut self.literal)));
        }
    }

    fn finish(mut self) -> Result<Vec<Segment<'a>>, FormatError> {
        match self.state {
            State::Literal => {
                self.flush_literal();
                Ok(self.segments)
            }
            State::OpenBrace { start } => Err(malformed(start, "닫히지 않은 '{'")),
            State::Item { start } => Err(malformed(start - 1, "닫히지 않은 '{'")),
            State::CloseBrace { position } => Err(malformed(position, "짝이 없는 '}'")),
        }
    }
}

fn malformed(position: usize, reason: &str) -> FormatError {
    FormatError::MalformedTemplate {
        position,
        reason: reason.to_string(),
    }
}

/// 정렬 폭 상한 (절댓값)
const MAX_ALIGNMENT: u32 = 1_000_000;

/// `index[,alignment][:format]` 해석
fn parse_item(body: &str, start: usize) -> Result<FormatItem<'_>, FormatError> {
    let (head, format) = match body.split_once(':') {
        Some((head, format)) => (head, Some(format).filter(|f| !f.is_empty())),
        None => (body, None),
    };
    let (index, alignment) = match head.split_once(',') {
        Some((index, alignment)) => (index, Some(alignment)),
        None => (head, None),
    };
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| malformed(start, "잘못된 인자 인덱스"))?;
    let alignment = alignment
        .map(|a| a.trim().parse::<i32>())
        .transpose()
        .map_err(|_| malformed(start, "잘못된 정렬 폭"))?;
    if alignment.is_some_and(|a| a.unsigned_abs() >= MAX_ALIGNMENT) {
        return Err(malformed(start, "정렬 폭 초과"));
    }
    Ok(FormatItem { index, alignment, format })
}

/// 템플릿을 조각으로 분해
pub fn parse(template: &str) -> Result<Vec<Segment<'_>>, FormatError> {
    let mut scanner = TemplateScanner::new(template);
    for (position, c) in template.char_indices() {
        scanner.feed(position, c)?;
    }
    scanner.finish()
}

/// 정렬 폭만큼 공백으로 채움 (글자 수 기준)
fn align(text: String, alignment: Option<i32>) -> String {
    let Some(alignment) = alignment else {
        return text;
    };
    let width = alignment.unsigned_abs() as usize;
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    let padding = " ".repeat(width - len);
    if alignment > 0 {
        padding + &text
    } else {
        text + &padding
    }
}

/// 템플릿 치환
pub fn format(
    formatter: &ParticleFormatter,
    template: &str,
    args: &[Argument],
) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    for segment in parse(template)? {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Item(item) => {
                let arg = args.get(item.index).ok_or(FormatError::ArgumentIndexOutOfRange {
                    index: item.index,
                    count: args.len(),
                })?;
                let text = formatter.format_argument(item.format, arg)?;
                out.push_str(&align(text, item.alignment));
            }
        }
    }
    Ok(out)
}
