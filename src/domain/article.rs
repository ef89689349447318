//! Article Context - 文章的查询条件、写入参数与校验规则

use super::tag::STATE_RANGE;
use super::validation::{Bound, Check, FieldRule, Rule};

pub const GET_ARTICLE_RULES: &[FieldRule] = &[FieldRule::int(
    "id",
    &[Check::new(Rule::Min(1), "ID必须大于0")],
)];

pub const LIST_ARTICLES_RULES: &[FieldRule] = &[
    FieldRule::int("state", &[Check::new(STATE_RANGE, "状态只允许0或1")]).optional(),
    FieldRule::int("tag_id", &[Check::new(Rule::Min(1), "标签ID必须大于0")]).optional(),
];

pub const ADD_ARTICLE_RULES: &[FieldRule] = &[
    FieldRule::int("tag_id", &[Check::new(Rule::Min(1), "标签ID必须大于0")]),
    FieldRule::text("title", &[Check::new(Rule::Required, "标题不能为空")]),
    FieldRule::text("desc", &[Check::new(Rule::Required, "简述不能为空")]),
    FieldRule::text("content", &[Check::new(Rule::Required, "内容不能为空")]),
    FieldRule::text("created_by", &[Check::new(Rule::Required, "创建人不能为空")]),
    FieldRule::text(
        "cover_image_url",
        &[
            Check::new(Rule::Required, "图片封面不能为空"),
            Check::new(Rule::MaxLength(255), "图片封面最长长度只能是255"),
        ],
    ),
    FieldRule::int("state", &[Check::new(STATE_RANGE, "状态只允许0或1")]).with_default("0"),
];

/// 文章列表过滤条件，None 表示该维度不做限制
///
/// `tag_id: Some(0)` 与 `None` 含义不同：前者只匹配 tag_id 为 0 的文章。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub tag_id: Option<i64>,
    pub state: Option<i64>,
}

impl ArticleFilter {
    pub fn from_bound(bound: &Bound) -> Self {
        Self {
            tag_id: bound.int("tag_id"),
            state: bound.int("state"),
        }
    }
}

/// 新建文章
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub tag_id: i64,
    pub title: String,
    pub desc: String,
    pub content: String,
    pub created_by: String,
    pub cover_image_url: String,
    pub state: i64,
}

impl NewArticle {
    pub fn from_bound(bound: &Bound) -> Self {
        Self {
            tag_id: bound.int("tag_id").unwrap_or_default(),
            title: bound.text_owned("title"),
            desc: bound.text_owned("desc"),
            content: bound.text_owned("content"),
            created_by: bound.text_owned("created_by"),
            cover_image_url: bound.text_owned("cover_image_url"),
            state: bound.int("state").unwrap_or(0),
        }
    }
}
