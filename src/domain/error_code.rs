//! Error Catalog - 错误码与提示信息
//!
//! 所有对外返回的 `code` 都必须出自这里，`msg` 只能通过查表得到。

use serde::{Serialize, Serializer};

/// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Success,
    Error,
    InvalidParams,

    // 标签
    ExistTag,
    CheckExistTagFail,
    NotExistTag,
    GetTagsFail,
    CountTagFail,
    AddTagFail,
    EditTagFail,
    DeleteTagFail,

    // 文章
    NotExistArticle,
    CheckExistArticleFail,
    CountArticleFail,
    GetArticlesFail,
    GetArticleFail,

    // 鉴权
    AuthCheckTokenFail,
    AuthCheckTokenTimeout,
    AuthToken,
    Auth,

    // 上传
    UploadSaveImageFail,
    UploadCheckImageFail,
    UploadCheckImageFormat,
}

impl ErrorCode {
    /// 全部已登记的错误码
    pub const ALL: [ErrorCode; 23] = [
        ErrorCode::Success,
        ErrorCode::Error,
        ErrorCode::InvalidParams,
        ErrorCode::ExistTag,
        ErrorCode::CheckExistTagFail,
        ErrorCode::NotExistTag,
        ErrorCode::GetTagsFail,
        ErrorCode::CountTagFail,
        ErrorCode::AddTagFail,
        ErrorCode::EditTagFail,
        ErrorCode::DeleteTagFail,
        ErrorCode::NotExistArticle,
        ErrorCode::CheckExistArticleFail,
        ErrorCode::CountArticleFail,
        ErrorCode::GetArticlesFail,
        ErrorCode::GetArticleFail,
        ErrorCode::AuthCheckTokenFail,
        ErrorCode::AuthCheckTokenTimeout,
        ErrorCode::AuthToken,
        ErrorCode::Auth,
        ErrorCode::UploadSaveImageFail,
        ErrorCode::UploadCheckImageFail,
        ErrorCode::UploadCheckImageFormat,
    ];

    /// 对外的整型错误码
    pub const fn value(self) -> i32 {
        match self {
            ErrorCode::Success => 200,
            ErrorCode::Error => 500,
            ErrorCode::InvalidParams => 400,
            ErrorCode::ExistTag => 10001,
            ErrorCode::CheckExistTagFail => 10002,
            ErrorCode::NotExistTag => 10003,
            ErrorCode::GetTagsFail => 10004,
            ErrorCode::CountTagFail => 10005,
            ErrorCode::AddTagFail => 10006,
            ErrorCode::EditTagFail => 10007,
            ErrorCode::DeleteTagFail => 10008,
            ErrorCode::NotExistArticle => 10011,
            ErrorCode::CheckExistArticleFail => 10012,
            ErrorCode::CountArticleFail => 10016,
            ErrorCode::GetArticlesFail => 10017,
            ErrorCode::GetArticleFail => 10018,
            ErrorCode::AuthCheckTokenFail => 20001,
            ErrorCode::AuthCheckTokenTimeout => 20002,
            ErrorCode::AuthToken => 20003,
            ErrorCode::Auth => 20004,
            ErrorCode::UploadSaveImageFail => 30001,
            ErrorCode::UploadCheckImageFail => 30002,
            ErrorCode::UploadCheckImageFormat => 30003,
        }
    }

    /// 提示信息
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::Success => "ok",
            ErrorCode::Error => "fail",
            ErrorCode::InvalidParams => "请求参数错误",
            ErrorCode::ExistTag => "已存在该标签名称",
            ErrorCode::CheckExistTagFail => "获取已存在标签失败",
            ErrorCode::NotExistTag => "该标签不存在",
            ErrorCode::GetTagsFail => "获取所有标签失败",
            ErrorCode::CountTagFail => "统计标签失败",
            ErrorCode::AddTagFail => "新增标签失败",
            ErrorCode::EditTagFail => "修改标签失败",
            ErrorCode::DeleteTagFail => "删除标签失败",
            ErrorCode::NotExistArticle => "该文章不存在",
            ErrorCode::CheckExistArticleFail => "检查文章是否存在失败",
            ErrorCode::CountArticleFail => "统计文章失败",
            ErrorCode::GetArticlesFail => "获取多个文章失败",
            ErrorCode::GetArticleFail => "获取单个文章失败",
            ErrorCode::AuthCheckTokenFail => "Token鉴权失败",
            ErrorCode::AuthCheckTokenTimeout => "Token已超时",
            ErrorCode::AuthToken => "Token生成失败",
            ErrorCode::Auth => "Token错误",
            ErrorCode::UploadSaveImageFail => "保存图片失败",
            ErrorCode::UploadCheckImageFail => "检查图片失败",
            ErrorCode::UploadCheckImageFormat => "校验图片错误，图片格式或大小有问题",
        }
    }

    /// 根据整型错误码查找
    pub fn from_value(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.value() == value)
    }
}

/// 根据整型错误码查找提示信息，未登记的错误码统一返回 ERROR 的提示
pub fn message_for(value: i32) -> &'static str {
    ErrorCode::from_value(value)
        .unwrap_or(ErrorCode::Error)
        .message()
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.value())
    }
}
