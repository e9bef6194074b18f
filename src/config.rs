use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SamplerParams {
    #[arg(long, default_value_t = 20_000)]
    pub iterations: usize,

    /// Record a (score, decoded text) snapshot every N iterations.
    #[arg(long, default_value_t = 500)]
    pub snapshot_stride: usize,

    /// Upper clamp on the score difference before exponentiating. Caps how
    /// greedily far-better proposals are taken.
    #[arg(long, default_value_t = 1.0)]
    pub accept_clamp_hi: f64,

    /// Lower clamp on the score difference; underflow guard.
    #[arg(long, default_value_t = -1000.0)]
    pub accept_clamp_lo: f64,
}

#[derive(Args, Debug, Clone)]
pub struct AnnealParams {
    /// Run the annealed variant with a geometric beta ladder instead of the
    /// plain chain.
    #[arg(long, default_value_t = false)]
    pub anneal: bool,

    #[arg(long, default_value_t = 0.2)]
    pub beta_start: f64,

    #[arg(long, default_value_t = 2.0)]
    pub beta_end: f64,
}

#[derive(Args, Debug, Clone)]
pub struct EvalParams {
    /// Independent sampler chains to cross-validate over.
    #[arg(long, default_value_t = 5)]
    pub attempts: usize,

    /// Tolerance for the closeness rates, in [0, 1).
    #[arg(long, default_value_t = 0.1)]
    pub trust_level: f64,
}
