//! The slides of the strategy presentation, in order.

use crate::common::Result;

use super::builder::{Column, DeckBuilder, TitleSlide};

pub const DECK_TITLE: &str = "Statistical Basket Pairs Trading Strategy";
pub const AUTHORS: &str = "Scott Henriquez, Nakul Jadeja, Ayan Mahmood, Akbar Pathan";
pub const REPOSITORY: &str = "github.com/Ayan-Mahmood/QuantHFStrat";

/// Chart images embedded in the deck, in slide order.
pub const CHART_IMAGES: [&str; 6] = [
    "feature_importance.png",
    "cumulative_returns.png",
    "drawdown_chart.png",
    "rolling_sharpe.png",
    "monthly_heatmap.png",
    "correlation_matrix.png",
];

/// Number of slides [`build_slides`] produces.
pub const SLIDE_COUNT: usize = 20;

/// Add every slide of the deck to `deck`.
pub fn build_slides(deck: &mut DeckBuilder<'_>) -> Result<()> {
    deck.set_properties(DECK_TITLE, AUTHORS);

    // 1
    deck.add_title_slide(
        TitleSlide {
            title: DECK_TITLE,
            subtitle: "Volatility Dispersion Mean-Reversion",
            credits: "FE571 | Professor Anshul Sharma | Group 7",
            authors: AUTHORS,
        },
        &[
            "This project evolved from a simple pairs trading idea into a full quantitative research exercise",
            "We'll walk through our methodology, what worked, what didn't, and the lessons learned along the way",
            "The code is fully reproducible on GitHub — we welcome questions at the end",
        ],
    );

    // 2
    deck.add_content_slide(
        "Executive Summary",
        &[
            "Long/short volatility spread strategy across 4 sector pairs",
            "Market-neutral design with low SPY correlation (-0.07)",
            "ML filter tested to improve signal quality",
            "Result: Solid framework, inconsistent alpha — best as portfolio hedge",
        ],
        None,
        &[
            "We're being upfront: this strategy doesn't generate consistent alpha, but that's actually an important finding",
            "The real value is in the process — building a rigorous backtesting framework with proper bias controls",
            "Market neutrality is valuable even without alpha — it provides diversification benefits in a portfolio",
        ],
    );

    // 3
    deck.add_content_slide(
        "The Opportunity",
        &[
            "When volatility between related stocks diverges, it tends to snap back",
            "Semiconductor equipment makers vs chip designers",
            "Integrated oil majors vs refiners",
            "Temporary dislocations create trading opportunities",
        ],
        Some("Mean-reversion happens 5-7% of the time — we only trade when it's statistically extreme."),
        &[
            "Think of ASML and NVIDIA — both are in semiconductors, but ASML makes the machines that make the chips",
            "When fear hits the sector, they often move together, but sometimes one overreacts relative to the other",
            "The key insight is that we're not betting on direction — we're betting on the relationship normalizing",
        ],
    );

    // 4
    deck.add_table_slide(
        "Basket Construction",
        &["Pair", "Long Basket", "Short Basket"],
        &[
            &["Semiconductors", "ASML, TSM, KLAC", "AMD, NVDA, AVGO"],
            &["Energy", "XOM, CVX, COP", "VLO, MPC, PSX"],
            &["Tech Broad vs Mega", "RSPT, SOXX", "QQQ, AAPL, META"],
            &["Staples vs Discretionary", "XLP", "XLY"],
        ],
        Some("Pairs selected for economic linkage — same sector, different volatility profiles."),
        &[
            "We chose these pairs because they have fundamental economic relationships, not just statistical correlation",
            "The long basket typically has lower volatility — equipment makers, integrated majors, broader ETFs",
            "Using baskets instead of single stocks reduces idiosyncratic risk from earnings surprises or company-specific news",
        ],
    );

    // 5
    deck.add_two_column_slide(
        "Signal Generation",
        Column {
            header: "ENTRY RULES",
            items: &[
                "Z-score > +2.0 → Short spread",
                "Z-score < -2.0 → Long spread",
                "VIX > 30 → Stay flat",
            ],
        },
        Column {
            header: "EXIT RULES",
            items: &[
                "|Z-score| < 0.5 → Close position",
                "|Z-score| > 3.5 → Stop out",
                "Loss > 7% → Stop out",
            ],
        },
        Some("We enter on extremes (2σ) and exit when spreads normalize or risk limits hit."),
        &[
            "The 2-sigma threshold is a balance — tighter means more trades with lower conviction, wider means fewer opportunities",
            "VIX filter is crucial — we learned that trading during crisis periods (like March 2020) destroys returns",
            "The 7% stop-loss was added after our backtest audit revealed we were letting losers run too long",
        ],
    );

    // 6
    deck.add_content_slide(
        "Machine Learning Filter",
        &[
            "Random Forest classifier filters raw Z-score signals",
            "8 features: z-score, momentum, vol_ratio, VIX, correlation",
            "Walk-forward validation with quarterly retraining",
            "30-day embargo between train and test periods",
        ],
        Some("ML acts as a quality filter — only take signals the model thinks will work."),
        &[
            "We tried 40+ features initially but found that simpler models with 8 core features performed better out-of-sample",
            "The 30-day embargo prevents data leakage — autocorrelation in returns can inflate backtest performance",
            "Random Forest was chosen for interpretability — we can see which features matter, unlike neural networks",
        ],
    );

    // 7
    deck.add_chart_slide(
        "What Drives the Model?",
        CHART_IMAGES[0],
        Some("Z-score and momentum are the strongest predictors — simple features beat complex ones."),
        &[
            "Notice that the z-score itself is most important — the ML is essentially learning when z-score signals are reliable",
            "Momentum matters because mean-reversion strategies fail when there's a true regime shift happening",
            "VIX level helps the model avoid trading during extreme market stress when correlations break down",
        ],
    )?;

    // 8
    deck.add_content_slide(
        "Backtest Methodology",
        &[
            "Period: 2015-01-01 to 2024-12-31 (10 years)",
            "Position lagged 1 day (no look-ahead bias)",
            "Transaction costs: 5 bps per side (10 bps round-trip)",
            "Walk-forward quarterly retraining with 30-day embargo",
        ],
        Some("Backtest is clean — no look-ahead bias, realistic transaction costs."),
        &[
            "We actually found and fixed look-ahead bias during our audit — initial results looked much better before we fixed it",
            "10 bps round-trip is conservative for liquid stocks but accounts for market impact on larger positions",
            "Walk-forward testing is harder to implement but critical — static train/test splits overfit to specific market regimes",
        ],
    );

    // 9
    deck.add_chart_slide(
        "Cumulative Returns: ML vs Baseline vs SPY",
        CHART_IMAGES[1],
        Some("Three-way comparison shows ML improvement over baseline, both compared to SPY benchmark."),
        &[
            "The gray line is our baseline strategy, red is ML-enhanced — you can see ML reduces some drawdowns",
            "Semiconductors and Tech pairs show the most promise; Energy and Staples struggle to generate positive returns",
            "Remember, the goal isn't to beat SPY — it's to provide uncorrelated returns for portfolio diversification",
        ],
    )?;

    // 10
    deck.add_chart_slide(
        "Drawdown Profile",
        CHART_IMAGES[2],
        Some("Significant drawdowns require strong conviction and proper position sizing."),
        &[
            "50% drawdowns are painful — this is why we recommend only 5-10% portfolio allocation to this strategy",
            "Notice how drawdowns cluster around market stress periods like 2020 — mean-reversion fails when correlations spike",
            "The ML filter helps reduce some drawdowns but doesn't eliminate them — risk management is still essential",
        ],
    )?;

    // 11
    deck.add_table_slide(
        "Performance: ML vs Baseline",
        &["Pair", "Baseline Sharpe", "ML Sharpe", "Baseline MaxDD", "ML MaxDD"],
        &[
            &["Semiconductors", "-0.19", "+0.09", "-50%", "-30%"],
            &["Energy", "+0.01", "+0.08", "-50%", "-50%"],
            &["Tech vs Mega", "+0.18", "+0.09", "-26%", "-24%"],
            &["Staples vs Discr.", "-0.34", "-0.34", "-43%", "-35%"],
        ],
        Some("ML reduces drawdowns but doesn't consistently improve Sharpe — filtering helps risk, not return."),
        &[
            "Sharpe ratios near zero tell us this isn't a standalone alpha strategy — but that's okay for a hedge",
            "The ML improved Semiconductors significantly — from negative to positive Sharpe with 20% less drawdown",
            "Staples vs Discretionary is our worst performer — the relationship may be too noisy for mean-reversion",
        ],
    );

    // 12
    deck.add_chart_slide(
        "Rolling Sharpe Ratio (252-Day)",
        CHART_IMAGES[3],
        Some("Sharpe fluctuates significantly — strategy has periods of strength and weakness."),
        &[
            "The wide swings between positive and negative Sharpe show this strategy requires patience and conviction",
            "You can see periods where the strategy works well (2018, 2022) and periods where it struggles (2020-2021)",
            "This volatility in performance is why we don't recommend this as a primary strategy — it's supplemental",
        ],
    )?;

    // 13
    deck.add_table_slide(
        "Alpha & Beta vs SPY",
        &["Pair", "Alpha", "Beta", "Corr w/ SPY"],
        &[
            &["Semiconductors", "+1.2%", "-0.02", "-0.08"],
            &["Energy", "-2.1%", "+0.01", "+0.03"],
            &["Tech vs Mega", "+0.5%", "-0.03", "-0.12"],
            &["Staples vs Discr.", "-3.5%", "-0.01", "-0.05"],
            &["PORTFOLIO", "-0.89%", "-0.02", "-0.07"],
        ],
        Some("Near-zero beta confirms market neutrality — strategy returns are uncorrelated with SPY."),
        &[
            "Beta near zero across all pairs confirms the strategy is truly market-neutral — it won't move with SPY",
            "Negative correlation is actually desirable — it means this strategy can hedge equity exposure in a portfolio",
            "The -0.07 portfolio correlation means adding this to a 60/40 portfolio would reduce overall volatility",
        ],
    );

    // 14
    deck.add_chart_slide(
        "Monthly Returns Heatmap",
        CHART_IMAGES[4],
        Some("No clear seasonality — returns are spread across different periods."),
        &[
            "We looked for monthly patterns like 'sell in May' but found no consistent seasonality in our returns",
            "The lack of seasonality is actually good — it means returns aren't driven by calendar effects that could disappear",
            "You can see the red cluster in early 2020 — that's the COVID crash where mean-reversion completely failed",
        ],
    )?;

    // 15
    deck.add_table_slide(
        "Yearly Performance vs SPY",
        &["Year", "Strategy", "SPY", "Outperform?"],
        &[
            &["2018", "+13%", "-4%", "Yes"],
            &["2022", "+16%", "-18%", "Yes"],
            &["2020", "-40%", "+18%", "No"],
            &["2021", "-25%", "+29%", "No"],
        ],
        Some("Strategy outperforms in down markets — potential use as a tail-risk hedge."),
        &[
            "This is the key insight: we outperform when SPY is negative (2018, 2022) and underperform in bull markets",
            "2020 was our worst year because COVID caused correlations to spike to 1 — everything fell together",
            "If you already own SPY, adding this strategy provides insurance in down years at the cost of bull market returns",
        ],
    );

    // 16
    deck.add_chart_slide(
        "Strategy Diversification",
        CHART_IMAGES[5],
        Some("Low correlation between pairs (avg 0.03) means combining them reduces portfolio risk."),
        &[
            "Each pair trades independently — semiconductors don't predict energy, tech doesn't predict staples",
            "This low cross-correlation is powerful: combining all 4 pairs reduces volatility without reducing expected return",
            "In portfolio theory terms, we get diversification benefit from running multiple uncorrelated sub-strategies",
        ],
    )?;

    // 17
    deck.add_table_slide(
        "Risk Profile",
        &["Metric", "Value", "Interpretation"],
        &[
            &["Max Drawdown", "-26% to -50%", "Significant capital risk"],
            &["VaR (95%)", "-1.0% to -1.7%", "Daily loss expectation"],
            &["CVaR (95%)", "-1.6% to -2.9%", "Tail risk worst days"],
            &["Win Rate", "48-52%", "Below coin flip"],
        ],
        Some("This is a low win-rate, high-variance strategy — position sizing is critical."),
        &[
            "50% max drawdown means you need strong conviction — most investors would abandon the strategy mid-drawdown",
            "VaR and CVaR tell us on a bad day (5% worst days), we lose 1-3% which is manageable with proper sizing",
            "Win rate near 50% means profits come from winners being bigger than losers, not from winning more often",
        ],
    );

    // 18
    deck.add_two_column_slide(
        "Fixes & Lessons Learned",
        Column {
            header: "WHAT WE FIXED",
            items: &[
                "✓ Removed look-ahead bias",
                "✓ Added 30-day train/test embargo",
                "✓ Corrected transaction costs",
                "✓ Implemented 3 stop-loss rules",
            ],
        },
        Column {
            header: "WHAT WE LEARNED",
            items: &[
                "• 8 features beat 40 features",
                "• Spread mean-reverts only 5-7%",
                "• VIX regime matters significantly",
                "• Alpha is hard to find",
            ],
        },
        Some("Proper backtesting revealed our initial results were inflated — honesty improved the strategy."),
        &[
            "Our initial backtest showed 2+ Sharpe ratio — after fixing biases, we got near-zero. That's a humbling lesson.",
            "Look-ahead bias is the #1 killer of academic trading strategies — we used next-day signals accidentally",
            "The fact that we found and fixed these issues is actually the most valuable part of this project",
        ],
    );

    // 19
    deck.add_two_column_slide(
        "Investment Thesis",
        Column {
            header: "WHAT WORKED",
            items: &[
                "✓ Market-neutral (β ≈ 0)",
                "✓ Low SPY correlation",
                "✓ Stop-losses limit tail risk",
                "✓ Outperforms in down markets",
            ],
        },
        Column {
            header: "WHAT DIDN'T",
            items: &[
                "✗ No consistent alpha",
                "✗ Large drawdowns (26-50%)",
                "✗ Underperforms in bull markets",
                "✗ Low win rate (~50%)",
            ],
        },
        Some("Best suited as a PORTFOLIO HEDGE — allocate 5-10% for downside protection."),
        &[
            "We're not claiming this is an alpha machine — we're being honest about what it is: a diversification tool",
            "The 5-10% allocation recommendation comes from balancing hedge benefit against opportunity cost in bull markets",
            "For a family office or pension fund, this type of uncorrelated strategy has real value even at low Sharpe",
        ],
    );

    // 20
    deck.add_questions_slide(
        REPOSITORY,
        &[
            "Thank you for your attention — all code is available on GitHub for you to reproduce our results",
            "We welcome questions about methodology, the ML approach, or how this could fit in a real portfolio",
            "This project taught us more about proper backtesting than any textbook — happy to discuss the technical details",
        ],
    );

    Ok(())
}
