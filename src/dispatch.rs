//! dispatch — отправка тела сниппета через хост.
//!
//! Правило:
//! - тело (после trim) начинается с '/' -> команда; путь ввода команды всегда закрывает чат;
//! - иначе обычное сообщение (тело как есть); чат закрывается только при closeChatAfterSend.

use anyhow::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Trimmed command text, starts with '/'.
    Command(String),
    /// Message body, untrimmed.
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendPlan {
    pub delivery: Delivery,
    pub close_chat: bool,
}

/// Host-side collaborator that actually delivers text.
pub trait ChatSink {
    fn submit_command(&mut self, command: &str) -> Result<()>;
    fn send_message(&mut self, text: &str) -> Result<()>;
    fn close_chat(&mut self) -> Result<()>;
}

pub fn plan_send(body: &str, close_chat_after_send: bool) -> SendPlan {
    let trimmed = body.trim();
    if trimmed.starts_with('/') {
        SendPlan {
            delivery: Delivery::Command(trimmed.to_string()),
            close_chat: true,
        }
    } else {
        SendPlan {
            delivery: Delivery::Message(body.to_string()),
            close_chat: close_chat_after_send,
        }
    }
}

impl SendPlan {
    pub fn is_command(&self) -> bool {
        matches!(self.delivery, Delivery::Command(_))
    }

    pub fn deliver<S: ChatSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        match &self.delivery {
            Delivery::Command(cmd) => sink.submit_command(cmd)?,
            Delivery::Message(text) => sink.send_message(text)?,
        }
        if self.close_chat {
            sink.close_chat()?;
        }
        Ok(())
    }
}
