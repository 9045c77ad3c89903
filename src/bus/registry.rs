//! Topic → subscriber lists, plus the token allocator.

use std::collections::HashMap;

use super::subscription::{Handler, Subscription, Token};

/// Per-bus subscriber bookkeeping.
///
/// Topic lists are created on first subscribe and kept even after their
/// last subscriber leaves, so a topic that has ever been subscribed to
/// still "exists" for `publish`.
#[derive(Debug)]
pub(crate) struct TopicRegistry {
    topics: HashMap<String, Vec<Subscription>>,
    owners: HashMap<Token, String>,
    /// `None` once `u64::MAX` has been handed out.
    next_token: Option<u64>,
}

impl TopicRegistry {
    pub(crate) fn new(first_token: u64) -> Self {
        TopicRegistry {
            topics: HashMap::new(),
            owners: HashMap::new(),
            next_token: Some(first_token),
        }
    }

    /// Register `handler` under the next token. `None` when every token has
    /// been issued; tokens never wrap around.
    pub(crate) fn insert(&mut self, topic: &str, handler: Handler) -> Option<Token> {
        let value = self.next_token?;
        let token = Token::new(value);
        self.next_token = value.checked_add(1);

        self.topics
            .entry(topic.to_owned())
            .or_default()
            .push(Subscription { token, handler });
        self.owners.insert(token, topic.to_owned());
        Some(token)
    }

    pub(crate) fn remove(&mut self, token: Token) -> Option<Token> {
        let topic = self.owners.remove(&token)?;
        let list = self.topics.get_mut(&topic)?;
        let pos = list.iter().position(|s| s.token == token)?;
        list.remove(pos);
        Some(token)
    }

    /// Handlers for `topic`, newest subscription first. `None` if the topic
    /// was never subscribed to.
    pub(crate) fn dispatch_order(&self, topic: &str) -> Option<Vec<Handler>> {
        self.topics
            .get(topic)
            .map(|list| list.iter().rev().map(|s| s.handler.clone()).collect())
    }

    pub(crate) fn contains_topic(&self, topic: &str) -> bool {
        self.topics.contains_key(topic)
    }

    pub(crate) fn len(&self, topic: &str) -> usize {
        self.topics.get(topic).map_or(0, Vec::len)
    }

    pub(crate) fn topics(&self) -> Vec<String> {
        let mut names: Vec<String> = self.topics.keys().cloned().collect();
        names.sort();
        names
    }

    pub(crate) fn peek_token(&self) -> Option<Token> {
        self.next_token.map(Token::new)
    }
}
