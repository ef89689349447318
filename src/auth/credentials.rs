//! App Credentials - 静态 app_key / app_secret 校验

use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;

use crate::domain::validation::{Check, FieldRule, Rule};

pub const AUTH_RULES: &[FieldRule] = &[
    FieldRule::text(
        "app_key",
        &[
            Check::new(Rule::Required, "app_key不能为空"),
            Check::new(Rule::MaxLength(50), "app_key最长为50字符"),
        ],
    ),
    FieldRule::text(
        "app_secret",
        &[
            Check::new(Rule::Required, "app_secret不能为空"),
            Check::new(Rule::MaxLength(50), "app_secret最长为50字符"),
        ],
    ),
];

/// 服务端配置的应用凭据
#[derive(Clone)]
pub struct AppCredentials {
    app_key: String,
    app_secret: String,
}

impl AppCredentials {
    pub fn new(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
        }
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// 两项都需匹配；比较耗时与输入内容和长度都无关
    pub fn matches(&self, app_key: &str, app_secret: &str) -> bool {
        let key_ok = digest_eq(self.app_key.as_bytes(), app_key.as_bytes());
        let secret_ok = digest_eq(self.app_secret.as_bytes(), app_secret.as_bytes());
        key_ok & secret_ok
    }
}

impl fmt::Debug for AppCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppCredentials")
            .field("app_key", &self.app_key)
            .field("app_secret", &"***")
            .finish()
    }
}

/// 先取定长摘要再做常量时间比较，长度差异不会提前返回
fn digest_eq(a: &[u8], b: &[u8]) -> bool {
    let ha = Sha256::digest(a);
    let hb = Sha256::digest(b);
    ha.ct_eq(&hb).into()
}
