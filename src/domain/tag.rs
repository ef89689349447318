//! Tag Context - 标签的查询条件、写入参数与校验规则

use super::validation::{Bound, Check, FieldRule, Rule};

/// 状态字段的取值范围
pub const STATE_RANGE: Rule = Rule::Range(0, 1);

pub const LIST_TAGS_RULES: &[FieldRule] = &[
    FieldRule::text("name", &[]).optional(),
    FieldRule::int("state", &[Check::new(STATE_RANGE, "状态只允许0或1")]).optional(),
];

pub const ADD_TAG_RULES: &[FieldRule] = &[
    FieldRule::text(
        "name",
        &[
            Check::new(Rule::Required, "名称不能为空"),
            Check::new(Rule::MaxLength(100), "名称最长为100字符"),
        ],
    ),
    FieldRule::text(
        "created_by",
        &[
            Check::new(Rule::Required, "创建人不能为空"),
            Check::new(Rule::MaxLength(100), "创建人最长为100字符"),
        ],
    ),
    FieldRule::int("state", &[Check::new(STATE_RANGE, "状态只允许0或1")]).with_default("0"),
];

pub const EDIT_TAG_RULES: &[FieldRule] = &[
    FieldRule::int("id", &[Check::new(Rule::Min(1), "ID必须大于0")]),
    FieldRule::text(
        "name",
        &[
            Check::new(Rule::Required, "名称不能为空"),
            Check::new(Rule::MaxLength(100), "名称最长为100字符"),
        ],
    ),
    FieldRule::text(
        "modified_by",
        &[
            Check::new(Rule::Required, "修改人不能为空"),
            Check::new(Rule::MaxLength(100), "修改人最长为100字符"),
        ],
    ),
    FieldRule::int("state", &[Check::new(STATE_RANGE, "状态只允许0或1")]).optional(),
];

pub const DELETE_TAG_RULES: &[FieldRule] = &[FieldRule::int(
    "id",
    &[Check::new(Rule::Min(1), "ID必须大于0")],
)];

/// 标签列表过滤条件，None 表示该维度不做限制
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    pub name: Option<String>,
    pub state: Option<i64>,
}

impl TagFilter {
    pub fn from_bound(bound: &Bound) -> Self {
        Self {
            name: bound.text("name").map(str::to_string),
            state: bound.int("state"),
        }
    }
}

/// 新建标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub name: String,
    pub created_by: String,
    pub state: i64,
}

impl NewTag {
    pub fn from_bound(bound: &Bound) -> Self {
        Self {
            name: bound.text_owned("name"),
            created_by: bound.text_owned("created_by"),
            state: bound.int("state").unwrap_or(0),
        }
    }
}

/// 修改标签；state 为 None 时保持原值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChanges {
    pub name: String,
    pub modified_by: String,
    pub state: Option<i64>,
}

impl TagChanges {
    pub fn from_bound(bound: &Bound) -> Self {
        Self {
            name: bound.text_owned("name"),
            modified_by: bound.text_owned("modified_by"),
            state: bound.int("state"),
        }
    }
}
