// Raw wire shapes: everything still string-typed, exactly as captured from
// the email text. The assembler turns these into domain values and is the
// only place domain constraints are enforced.

/// Pre-validation capture of one fill confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawFillConfirm {
    pub order_id: String,
    pub date_received: String,
    pub order_type: String,
    pub legs: Vec<RawLeg>,
}

/// Pre-validation capture of one leg block. Option qualifiers stay `None`
/// for equity legs rather than holding empty strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawLeg {
    pub action: String,
    pub quantity: String,
    pub symbol: String,
    pub expiration: Option<String>,
    pub option_type: Option<String>,
    pub strike: Option<String>,
    pub fill_price: String,
    pub fill_time: String,
}
