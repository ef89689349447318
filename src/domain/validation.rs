//! Validation Layer - 请求参数绑定与校验
//!
//! 规则以静态表声明（`&[FieldRule]`），每个字段先做类型绑定再逐条执行校验。
//! 校验不会在第一个错误处停止，所有违规一次性收集。

use std::collections::HashMap;
use std::fmt;

/// 原始请求参数（query + form 合并后的键值）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    values: HashMap<String, String>,
}

impl RawParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入参数，同名参数后写覆盖先写
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.values.extend(iter);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// 校验规则
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// 文本去除首尾空白后非空；整数非 0
    Required,
    /// 整数 >= n
    Min(i64),
    /// 文本字符数 <= n
    MaxLength(usize),
    /// 整数在 [lo, hi] 闭区间内
    Range(i64, i64),
    /// 整数绑定失败且字段未声明任何数值规则时使用
    Numeric,
}

impl Rule {
    fn is_numeric(self) -> bool {
        matches!(self, Rule::Required | Rule::Min(_) | Rule::Range(_, _))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Required => write!(f, "Required"),
            Rule::Min(n) => write!(f, "Min({})", n),
            Rule::MaxLength(n) => write!(f, "MaxLength({})", n),
            Rule::Range(lo, hi) => write!(f, "Range({}, {})", lo, hi),
            Rule::Numeric => write!(f, "Numeric"),
        }
    }
}

/// 一条规则及其违规提示
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub rule: Rule,
    pub message: &'static str,
}

impl Check {
    pub const fn new(rule: Rule, message: &'static str) -> Self {
        Self { rule, message }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Int,
}

/// 字段缺省时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// 缺省视为空字符串，照常校验
    Always,
    /// 缺省或为空时跳过全部校验，绑定为 None
    Optional,
    /// 缺省或为空白时使用默认值
    Default(&'static str),
}

/// 单个字段的声明式规则
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
    pub checks: &'static [Check],
}

impl FieldRule {
    pub const fn text(name: &'static str, checks: &'static [Check]) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            presence: Presence::Always,
            checks,
        }
    }

    pub const fn int(name: &'static str, checks: &'static [Check]) -> Self {
        Self {
            name,
            kind: FieldKind::Int,
            presence: Presence::Always,
            checks,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            presence: Presence::Optional,
            ..self
        }
    }

    pub const fn with_default(self, value: &'static str) -> Self {
        Self {
            presence: Presence::Default(value),
            ..self
        }
    }
}

/// 单条违规
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub rule: Rule,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.field, self.rule, self.message)
    }
}

/// 校验结果，按规则声明顺序排列；为空即合法
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    fn push(&mut self, field: &'static str, rule: Rule, message: impl Into<String>) {
        self.violations.push(Violation {
            field,
            rule,
            message: message.into(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum BoundValue {
    Text(String),
    Int(i64),
}

/// 绑定后的强类型字段值
#[derive(Debug, Clone, Default)]
pub struct Bound {
    values: HashMap<&'static str, BoundValue>,
}

impl Bound {
    /// 文本字段；可选字段未提供时为 None
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(BoundValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// 整数字段；可选字段未提供或绑定失败时为 None
    pub fn int(&self, name: &str) -> Option<i64> {
        match self.values.get(name) {
            Some(BoundValue::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// 必填文本字段，校验通过后调用
    pub fn text_owned(&self, name: &str) -> String {
        self.text(name).unwrap_or_default().to_string()
    }
}

/// 一次校验的产物
#[derive(Debug, Clone)]
pub struct Validated {
    pub bound: Bound,
    pub result: ValidationResult,
}

impl Validated {
    pub fn into_result(self) -> Result<Bound, ValidationResult> {
        if self.result.is_valid() {
            Ok(self.bound)
        } else {
            Err(self.result)
        }
    }
}

/// 整数绑定，失败返回 None
pub fn coerce_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// 按规则表绑定并校验参数
pub fn validate(params: &RawParams, rules: &[FieldRule]) -> Validated {
    let mut bound = Bound::default();
    let mut result = ValidationResult::default();

    for field in rules {
        let raw = match (params.get(field.name), field.presence) {
            (None, Presence::Optional) => continue,
            (Some(v), Presence::Optional) if v.is_empty() => continue,
            (None, Presence::Default(default)) => default,
            (Some(v), Presence::Default(default)) if v.trim().is_empty() => default,
            (None, Presence::Always) => "",
            (Some(v), _) => v,
        };

        match field.kind {
            FieldKind::Text => {
                for check in field.checks {
                    if !text_passes(check.rule, raw) {
                        result.push(field.name, check.rule, check.message);
                    }
                }
                bound
                    .values
                    .insert(field.name, BoundValue::Text(raw.to_string()));
            }
            FieldKind::Int => match coerce_int(raw) {
                Some(value) => {
                    for check in field.checks {
                        if !int_passes(check.rule, value) {
                            result.push(field.name, check.rule, check.message);
                        }
                    }
                    bound.values.insert(field.name, BoundValue::Int(value));
                }
                None => {
                    // 绑定失败等同于越界：每条数值规则都记一次违规
                    let mut numeric = field.checks.iter().filter(|c| c.rule.is_numeric()).peekable();
                    if numeric.peek().is_none() {
                        result.push(
                            field.name,
                            Rule::Numeric,
                            format!("{} must be an integer", field.name),
                        );
                    }
                    for check in numeric {
                        result.push(field.name, check.rule, check.message);
                    }
                }
            },
        }
    }

    Validated { bound, result }
}

fn text_passes(rule: Rule, value: &str) -> bool {
    match rule {
        Rule::Required => !value.trim().is_empty(),
        Rule::MaxLength(max) => value.chars().count() <= max,
        Rule::Min(_) | Rule::Range(_, _) | Rule::Numeric => true,
    }
}

fn int_passes(rule: Rule, value: i64) -> bool {
    match rule {
        Rule::Required => value != 0,
        Rule::Min(min) => value >= min,
        Rule::Range(lo, hi) => (lo..=hi).contains(&value),
        Rule::MaxLength(_) | Rule::Numeric => true,
    }
}
