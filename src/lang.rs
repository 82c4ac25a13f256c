use serde::Deserialize;
use std::fmt::Display;

/// Language used for user facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    /// Parses a locale tag such as `zh_CN.UTF-8`, `en-US` or `zh`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Lang> {
        let tag = tag.trim().to_ascii_lowercase();
        if tag.starts_with("zh") {
            Some(Lang::Zh)
        } else if tag.starts_with("en") || tag == "c" || tag == "posix" {
            Some(Lang::En)
        } else {
            None
        }
    }

    /// Picks the language from, in order, the configured value, `PT_LANG`
    /// and `LANG`. Falls back to English.
    pub fn detect(configured: Option<Lang>, env: impl Fn(&str) -> Option<String>) -> Lang {
        configured
            .or_else(|| env("PT_LANG").as_deref().and_then(Lang::from_tag))
            .or_else(|| env("LANG").as_deref().and_then(Lang::from_tag))
            .unwrap_or_default()
    }
}

/// Every message the tool prints, with its arguments.
#[derive(Clone, Copy)]
pub enum Text<'a> {
    EmptyCommand,
    Unrecognized(&'a str),
    MissingProjectName,
    NotADirectory(&'a dyn Display),
    NotEmpty(&'a dyn Display),
    UnknownTemplate(&'a str),
    ChooseTemplate,
    PromptFailed,
    FetchStart,
    FetchFailed,
    FetchDone,
    TransformStart,
    TransformFailed,
    TransformDone,
    Created(&'a dyn Display),
}

impl Text<'_> {
    #[must_use]
    pub fn render(&self, lang: Lang) -> String {
        match lang {
            Lang::En => self.english(),
            Lang::Zh => self.chinese(),
        }
    }

    fn english(&self) -> String {
        match self {
            Text::EmptyCommand => "command cannot be empty".into(),
            Text::Unrecognized(args) => format!("unrecognized command: {args}"),
            Text::MissingProjectName => "please enter a project name".into(),
            Text::NotADirectory(path) => format!("{path} already exists and is not a directory"),
            Text::NotEmpty(path) => format!("{path} already exists and is not empty"),
            Text::UnknownTemplate(id) => format!("unknown template '{id}'"),
            Text::ChooseTemplate => "Please choose a template:".into(),
            Text::PromptFailed => "inquirer encountered an error".into(),
            Text::FetchStart => "Downloading template project".into(),
            Text::FetchFailed => "Failed to download template project".into(),
            Text::FetchDone => "Template project downloaded".into(),
            Text::TransformStart => "Processing code".into(),
            Text::TransformFailed => "Failed to process code".into(),
            Text::TransformDone => "Code processed".into(),
            Text::Created(path) => format!("New project created at {path}"),
        }
    }

    fn chinese(&self) -> String {
        match self {
            Text::EmptyCommand => "指令不能为空".into(),
            Text::Unrecognized(args) => format!("无法识别的指令: {args}"),
            Text::MissingProjectName => "请输入项目名称".into(),
            Text::NotADirectory(path) => format!("{path}已经存在，且不是文件夹"),
            Text::NotEmpty(path) => format!("{path}已经存在, 且不为空"),
            Text::UnknownTemplate(id) => format!("无法识别的模板: {id}"),
            Text::ChooseTemplate => "请选择你要的模板：".into(),
            Text::PromptFailed => "inquirer 发生错误".into(),
            Text::FetchStart => "开始下载模板项目".into(),
            Text::FetchFailed => "下载模板项目失败".into(),
            Text::FetchDone => "下载模板项目完成".into(),
            Text::TransformStart => "开始处理代码".into(),
            Text::TransformFailed => "处理代码失败".into(),
            Text::TransformDone => "处理代码成功".into(),
            Text::Created(path) => format!("项目已创建: {path}"),
        }
    }
}
