use std::fmt::Display;

use colored::{
    Color,
    Colorize,
};

#[derive(strum_macros::Display)]
#[strum(serialize_all = "UPPERCASE")]
enum Message {
    Info,
    Success,
    Error,
}

impl Message {
    fn get_color(&self) -> LogColor {
        match self {
            Self::Info => LogColor::Info,
            Self::Success => LogColor::Highlight,
            Self::Error => LogColor::Error,
        }
    }
}

fn log(msg_ty: Message, label: impl Display, msg: impl Display) {
    let color = msg_ty.get_color();
    println!(
        "[{}] {} {}",
        msg_ty.to_string().color(color),
        label.to_string().bold(),
        msg.to_string().bright_black()
    );
}

#[derive(Clone, Copy, Debug)]
pub enum LogColor {
    Highlight,
    Info,
    Error,
    Gray,
}

#[rustfmt::skip]
mod unformatted {
    use super::*;

    pub fn log_info(label: impl Display, msg: impl Display) { log(Message::Info, label, msg) }
    pub fn log_success(label: impl Display, msg: impl Display) { log(Message::Success, label, msg) }
    pub fn log_error(label: impl Display, msg: impl Display) { log(Message::Error, label, msg) }

    impl From<LogColor> for Color {
        fn from(value: LogColor) -> Color {
            match value {
                LogColor::Highlight => Color::TrueColor { r: 87,  g: 215, b: 143 },
                LogColor::Info      => Color::TrueColor { r: 66,  g: 135, b: 245 },
                LogColor::Error     => Color::TrueColor { r: 235, g: 54,  b: 54  },
                LogColor::Gray      => Color::TrueColor { r: 160, g: 160, b: 160 },
            }
        }
    }
}

pub use unformatted::*;
