use crate::types::alloc_type::{String, Vec};
use crate::types::ErrorVec;
use core::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A contextual message handed to a check through its [`CheckContext`](crate::CheckContext).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    Number(f64),
}

impl Message {
    /// Returns the text, if this is a text message.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) => None,
        }
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for Message {
    #[inline]
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Message {
    #[inline]
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for Message {
    #[inline]
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Message {
    #[inline]
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

/// The message value bound to a cursor view by [`Cursor::message`](crate::Cursor::message).
///
/// A single message is a one-element binding. `next`, `error` and `check_all`
/// see the first entry; `repeat_next` hands entry `i` to repetition `i + 1`
/// and nothing to repetitions past the end.
///
/// # Examples
///
/// ```
/// use snug_error::{Message, MessageBinding};
///
/// let single = MessageBinding::from("required");
/// assert_eq!(single.first(), Some(&Message::from("required")));
///
/// let many = MessageBinding::from(["first", "second"]);
/// assert_eq!(many.get(1), Some(&Message::from("second")));
/// assert_eq!(many.get(2), None);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageBinding {
    messages: ErrorVec<Message>,
}

impl MessageBinding {
    /// A binding with no message at all.
    #[inline]
    pub fn none() -> Self {
        Self { messages: ErrorVec::new() }
    }

    /// The message seen by plain `next`, `error` and `check_all` calls.
    #[inline]
    pub fn first(&self) -> Option<&Message> {
        self.messages.first()
    }

    /// The message for the repetition at zero-based `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Message> {
        self.messages.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// A one-element binding holding only the first message.
    pub(crate) fn head(&self) -> Self {
        Self { messages: self.messages.iter().take(1).cloned().collect() }
    }
}

impl From<Message> for MessageBinding {
    #[inline]
    fn from(message: Message) -> Self {
        Self { messages: smallvec::smallvec![message] }
    }
}

impl From<&str> for MessageBinding {
    #[inline]
    fn from(text: &str) -> Self {
        Message::from(text).into()
    }
}

impl From<String> for MessageBinding {
    #[inline]
    fn from(text: String) -> Self {
        Message::from(text).into()
    }
}

impl From<f64> for MessageBinding {
    #[inline]
    fn from(number: f64) -> Self {
        Message::from(number).into()
    }
}

impl From<i32> for MessageBinding {
    #[inline]
    fn from(number: i32) -> Self {
        Message::from(number).into()
    }
}

impl<T: Into<Message>> From<Vec<T>> for MessageBinding {
    fn from(messages: Vec<T>) -> Self {
        messages.into_iter().collect()
    }
}

impl<T: Into<Message>, const N: usize> From<[T; N]> for MessageBinding {
    fn from(messages: [T; N]) -> Self {
        messages.into_iter().collect()
    }
}

impl<T: Into<Message>> FromIterator<T> for MessageBinding {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { messages: iter.into_iter().map(Into::into).collect() }
    }
}
