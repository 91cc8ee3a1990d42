//! Reward tokens.

/// The two reward tokens handed out at the party, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Redeemable for a pizza slice.
    Slice,
    /// Redeemable for a drink.
    Beverage,
}

impl TokenKind {
    /// Returns the token code.
    pub fn code(&self) -> &'static str {
        match self {
            TokenKind::Slice => "SLICE",
            TokenKind::Beverage => "BEBIDA",
        }
    }

    /// Returns the long display name.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Slice => "Token de Slice",
            TokenKind::Beverage => "Token de Bebida",
        }
    }

    /// Returns the ticker shown in the token list.
    pub fn ticker(&self) -> &'static str {
        match self {
            TokenKind::Slice => "$SLICE",
            TokenKind::Beverage => "$DRINK",
        }
    }

    /// Returns what the counter hands over when the token is scanned.
    pub fn prize(&self) -> &'static str {
        match self {
            TokenKind::Slice => "rebanada de pizza",
            TokenKind::Beverage => "bebida",
        }
    }

    /// Returns the glyph drawn next to the token.
    pub fn icon(&self) -> &'static str {
        match self {
            TokenKind::Slice => "🍕",
            TokenKind::Beverage => "🥤",
        }
    }
}

/// A token and the guest's balance of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub balance: u32,
}

impl Token {
    /// Creates a token with a zero balance.
    pub fn new(kind: TokenKind) -> Self {
        Self { kind, balance: 0 }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Whether at least one unit is available to redeem.
    pub fn is_funded(&self) -> bool {
        self.balance > 0
    }
}

/// Returns the starting token set: one of each kind, both at zero.
pub fn initial_tokens() -> [Token; 2] {
    [Token::new(TokenKind::Slice), Token::new(TokenKind::Beverage)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_tokens_are_slice_then_beverage_at_zero() {
        let tokens = initial_tokens();
        assert_eq!(tokens[0].code(), "SLICE");
        assert_eq!(tokens[1].code(), "BEBIDA");
        assert!(tokens.iter().all(|t| t.balance == 0));
    }

    #[test]
    fn tickers_differ_from_codes_for_beverage() {
        assert_eq!(TokenKind::Slice.ticker(), "$SLICE");
        assert_eq!(TokenKind::Beverage.ticker(), "$DRINK");
        assert_eq!(TokenKind::Beverage.name(), "Token de Bebida");
    }

    #[test]
    fn funded_only_with_positive_balance() {
        let mut token = Token::new(TokenKind::Slice);
        assert!(!token.is_funded());
        token.balance = 1;
        assert!(token.is_funded());
    }
}
