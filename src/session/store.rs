use super::message::Message;

/// The ordered transcript of one interactive session.
///
/// Insertion order is display order. Entries are never reordered or
/// deduplicated; the only way to remove one is to clear them all.
#[derive(Debug, Clone, Default)]
pub struct Session {
    messages: Vec<Message>,
}

impl Session {
    /// Creates an empty session.
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Returns the full transcript in display order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Role;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.is_empty());
        assert_eq!(session.len(), 0);
        assert!(session.all().is_empty());
    }

    #[test]
    fn test_append_preserves_order_and_duplicates() {
        let mut session = Session::new();
        session.append(Message::user("same"));
        session.append(Message::assistant("reply"));
        session.append(Message::user("same"));

        let roles: Vec<Role> = session.all().iter().map(Message::role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(session.all()[0], session.all()[2]);
    }

    #[test]
    fn test_clear_resets_regardless_of_length() {
        for count in [0, 1, 7, 50] {
            let mut session = Session::new();
            for i in 0..count {
                session.append(Message::user(format!("message {i}")));
            }

            session.clear();
            assert!(session.is_empty());
        }
    }
}
