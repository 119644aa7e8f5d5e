/// 校验错误文案的语言
///
/// 从 `locale` 请求头解析，认识 `zh` 和 `en`，其余一律当 `zh`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    pub fn from_header(value: Option<&str>) -> Locale {
        match value {
            Some("en") => Locale::En,
            _ => Locale::Zh,
        }
    }
}

/// 单个字段的校验错误
#[derive(Debug, Clone)]
pub struct ValidError {
    pub key: &'static str,
    pub message: String,
}

/// 字段校验器
///
/// Handler 绑定请求后逐字段调用，错误文案按请求的语言生成。
/// 字段存在与否通过 `Option` 静态表达，不做运行时反射。
#[derive(Debug)]
pub struct Validator {
    locale: Locale,
    errors: Vec<ValidError>,
}

impl Validator {
    pub fn new(locale: Locale) -> Validator {
        Validator {
            locale,
            errors: Vec::new(),
        }
    }

    /// 必填：值必须存在且非空
    pub fn required(&mut self, key: &'static str, value: Option<&str>) -> &mut Validator {
        if value.is_none_or(|v| v.trim().is_empty()) {
            let message = match self.locale {
                Locale::Zh => format!("{key}为必填字段"),
                Locale::En => format!("{key} is a required field"),
            };
            self.errors.push(ValidError { key, message });
        }
        self
    }

    /// 长度区间（字符数），值缺省时跳过
    pub fn length_between(
        &mut self,
        key: &'static str,
        value: Option<&str>,
        min: usize,
        max: usize,
    ) -> &mut Validator {
        if let Some(v) = value {
            let len = v.chars().count();
            if len < min || len > max {
                let message = match self.locale {
                    Locale::Zh => format!("{key}长度必须为{min}到{max}个字符"),
                    Locale::En => {
                        format!("{key} must be between {min} and {max} characters in length")
                    }
                };
                self.errors.push(ValidError { key, message });
            }
        }
        self
    }

    /// 枚举成员检查，值缺省时跳过
    pub fn one_of(
        &mut self,
        key: &'static str,
        value: Option<i16>,
        allowed: &[i16],
    ) -> &mut Validator {
        if let Some(v) = value {
            if !allowed.contains(&v) {
                let list = allowed
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                let message = match self.locale {
                    Locale::Zh => format!("{key}必须是[{list}]中的一个"),
                    Locale::En => format!("{key} must be one of [{list}]"),
                };
                self.errors.push(ValidError { key, message });
            }
        }
        self
    }

    /// 校验结束，失败时返回逐字段的文案列表
    pub fn finish(self) -> Result<(), Vec<String>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors.into_iter().map(|e| e.message).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_parsing_defaults_to_zh() {
        assert_eq!(Locale::from_header(Some("en")), Locale::En);
        assert_eq!(Locale::from_header(Some("zh")), Locale::Zh);
        assert_eq!(Locale::from_header(Some("fr")), Locale::Zh);
        assert_eq!(Locale::from_header(None), Locale::Zh);
    }

    #[test]
    fn required_and_length() {
        let mut v = Validator::new(Locale::Zh);
        v.required("name", Some(""))
            .length_between("created_by", Some("ab"), 3, 100);
        let errs = v.finish().expect_err("应校验失败");
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0], "name为必填字段");
        assert_eq!(errs[1], "created_by长度必须为3到100个字符");
    }

    #[test]
    fn english_messages() {
        let mut v = Validator::new(Locale::En);
        v.required("name", None).one_of("state", Some(3), &[0, 1]);
        let errs = v.finish().expect_err("应校验失败");
        assert_eq!(errs[0], "name is a required field");
        assert_eq!(errs[1], "state must be one of [0 1]");
    }

    #[test]
    fn absent_optional_fields_are_skipped() {
        let mut v = Validator::new(Locale::Zh);
        v.length_between("name", None, 3, 100)
            .one_of("state", None, &[0, 1]);
        assert!(v.finish().is_ok());
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let mut v = Validator::new(Locale::Zh);
        v.length_between("name", Some("标签"), 2, 100);
        assert!(v.finish().is_ok());
    }
}
