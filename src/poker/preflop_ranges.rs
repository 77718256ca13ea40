// Preflop chart data for 9-max play, 50-100bb with ante, plus ICM push/fold
// ranges for short stacks. Hands are stored as comma-separated lists and
// expanded into lookup sets on first use.
//
// Hand notation: pairs "AA", suited "AKs", offsuit "AKo".

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

pub type HandSet = HashSet<&'static str>;

fn hands(list: &'static str) -> HandSet {
    list.split(',')
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .collect()
}

/// Ranges for defending against an open raise.
pub struct OpenDefense {
    pub three_bet: HandSet,
    pub three_bet_bluff: HandSet,
    pub call: HandSet,
}

impl OpenDefense {
    fn new(three_bet: &'static str, call: &'static str, bluff: &'static str) -> OpenDefense {
        OpenDefense {
            three_bet: hands(three_bet),
            three_bet_bluff: hands(bluff),
            call: hands(call),
        }
    }
}

/// Ranges for defending our open against a 3bet.
pub struct ThreeBetDefense {
    pub four_bet: HandSet,
    pub four_bet_bluff: HandSet,
    pub call: HandSet,
    pub fold: HandSet,
}

impl ThreeBetDefense {
    fn new(
        four_bet: &'static str,
        call: &'static str,
        bluff: &'static str,
        fold: &'static str,
    ) -> ThreeBetDefense {
        ThreeBetDefense {
            four_bet: hands(four_bet),
            four_bet_bluff: hands(bluff),
            call: hands(call),
            fold: hands(fold),
        }
    }
}

/// Push/fold ranges for one position at one stack bucket. `push` is the full
/// range; the depth-specific fields are narrower subsets and may be empty.
#[derive(Default)]
pub struct PushRanges {
    pub push: HandSet,
    pub push_5bb: HandSet,
    pub push_lt5bb: HandSet,
    pub push_10bb: HandSet,
    pub push_6_9bb: HandSet,
}

// ---------------------------------------------------------------------------
// Opening ranges (RFI)
// ---------------------------------------------------------------------------

const UTG_OPEN: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,\
    AKs,AQs,AJs,ATs,A9s,A5s,\
    KQs,KJs,KTs,QJs,QTs,JTs,T9s,98s,\
    AKo,AQo";

const UTG1_OPEN: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,\
    AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,\
    KQs,KJs,KTs,K9s,QJs,QTs,Q9s,JTs,J9s,T9s,98s,87s,\
    AKo,AQo,AJo,KQo";

const UTG2_OPEN: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,55,\
    AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
    KQs,KJs,KTs,K9s,QJs,QTs,Q9s,JTs,J9s,T9s,98s,87s,76s,\
    AKo,AQo,AJo,KQo";

const LJ_OPEN: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,\
    AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
    KQs,KJs,KTs,K9s,QJs,QTs,Q9s,JTs,J9s,T9s,98s,87s,76s,65s,\
    AKo,AQo,AJo,ATo,KJo,KQo";

const HJ_OPEN: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
    AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
    KQs,KJs,KTs,K9s,K8s,QJs,QTs,Q9s,JTs,J9s,\
    T9s,T8s,98s,97s,87s,76s,65s,54s,\
    AKo,AQo,AJo,ATo,KQo,KJo,QJo";

const CO_OPEN: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
    AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
    KQs,KJs,KTs,K9s,K8s,K7s,QJs,QTs,Q9s,Q8s,JTs,J9s,J8s,\
    T9s,T8s,98s,97s,87s,86s,76s,75s,65s,64s,54s,43s,\
    AKo,AQo,AJo,ATo,A9o,KQo,KJo,KTo,QJo,QTo,JTo";

const BTN_OPEN: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
    AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
    KQs,KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
    QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
    JTs,J9s,J8s,J7s,J6s,T9s,T8s,T7s,T6s,\
    98s,97s,96s,87s,86s,85s,76s,75s,74s,65s,64s,54s,53s,43s,32s,\
    AKo,AQo,AJo,ATo,A9o,A8o,A7o,A6o,A5o,A4o,A3o,A2o,\
    KQo,KJo,KTo,K9o,K8o,K7o,QJo,QTo,Q9o,Q8o,JTo,J9o,J8o,\
    T9o,T8o,98o,97o,87o,76o";

const SB_OPEN: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
    AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
    KQs,KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
    QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
    JTs,J9s,J8s,J7s,J6s,J5s,J4s,J3s,J2s,\
    T9s,T8s,T7s,T6s,T5s,T4s,\
    98s,97s,96s,87s,86s,85s,76s,75s,74s,65s,64s,63s,54s,53s,43s,32s,\
    AKo,AQo,AJo,ATo,A9o,A8o,A7o,A6o,A5o,A4o,A3o,A2o,\
    KQo,KJo,KTo,K9o,K8o,K7o,K6o,K5o,K4o,K3o,K2o,\
    QJo,QTo,Q9o,Q8o,Q7o,Q6o,Q5o,Q4o,Q3o,Q2o,\
    J9o,J8o,J7o,J6o,T9o,T8o,T7o,T6o,\
    98o,97o,96o,87o,86o,76o,65o";

pub static OPEN_RANGES: Lazy<HashMap<&'static str, HandSet>> = Lazy::new(|| {
    HashMap::from([
        ("UTG", hands(UTG_OPEN)),
        ("UTG+1", hands(UTG1_OPEN)),
        ("UTG+2", hands(UTG2_OPEN)),
        ("LJ", hands(LJ_OPEN)),
        ("HJ", hands(HJ_OPEN)),
        ("CO", hands(CO_OPEN)),
        ("BTN", hands(BTN_OPEN)),
        ("SB", hands(SB_OPEN)),
    ])
});

// ---------------------------------------------------------------------------
// Defense vs open: DEFENSE_VS_OPEN[defender][opener]
// ---------------------------------------------------------------------------

const EP_3BET: &str = "AA,KK,QQ,AKs,AKo";
const LP_3BET: &str = "AA,KK,QQ,AKs,AKo,AQs";

const EP_VS_EP_CALL: &str = "JJ,TT,99,88,AQs,AJs,KQs,QJs,JTs";
const EP_VS_EP_BLUFF: &str = "ATs,KJs,AQo";

const BTN_VS_EP_CALL: &str = "JJ,TT,99,88,77,66,55,44,33,22,\
    AJs,ATs,A9s,KQs,KJs,KTs,K9s,QJs,QTs,Q9s,\
    JTs,J9s,T9s,T8s,98s,87s,76s";
const BTN_VS_MP_CALL: &str = "JJ,TT,99,88,77,66,55,44,33,22,\
    AJs,ATs,A9s,A8s,KQs,KJs,KTs,K9s,QJs,QTs,Q9s,\
    JTs,J9s,J8s,T9s,T8s,98s,87s,76s";
const BTN_BLUFF: &str = "A5s,AQo,AJo,KQo";
const BTN_BLUFF_WIDE: &str = "A5s,AQo,AJo,KQo,QJo";

const SB_VS_EP_CALL: &str = "JJ,TT,99,AQs,AJs,ATs,A9s,KQs,KJs,QJs,JTs";

const BB_VS_EP_3BET: &str = "AA,KK,QQ,AKs,AQs";
const BB_VS_EP_CALL: &str = "JJ,TT,99,88,77,66,55,44,33,22,\
    AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
    AKo,AQo,AJo,ATo,\
    KQs,KJs,KTs,K9s,K8s,K7s,K6s,K5s,KQo,\
    QJs,QTs,Q9s,Q8s,Q7s,QJo,JTs,J9s,J8s,J7s,\
    T9s,T8s,T7s,98s,97s,96s,87s";
const BB_VS_EP_BLUFF: &str = "86s,76s,75s,65s,64s,54s,43s";

pub static DEFENSE_VS_OPEN: Lazy<HashMap<&'static str, HashMap<&'static str, OpenDefense>>> =
    Lazy::new(|| {
        let mut map: HashMap<&'static str, HashMap<&'static str, OpenDefense>> = HashMap::new();

        map.insert(
            "UTG+1",
            HashMap::from([(
                "UTG",
                OpenDefense::new(EP_3BET, EP_VS_EP_CALL, EP_VS_EP_BLUFF),
            )]),
        );

        map.insert(
            "UTG+2",
            HashMap::from([
                ("UTG", OpenDefense::new(EP_3BET, EP_VS_EP_CALL, EP_VS_EP_BLUFF)),
                ("UTG+1", OpenDefense::new(EP_3BET, EP_VS_EP_CALL, EP_VS_EP_BLUFF)),
            ]),
        );

        map.insert(
            "LJ",
            HashMap::from([
                (
                    "UTG",
                    OpenDefense::new(
                        EP_3BET,
                        "JJ,TT,99,88,77,AQs,AJs,KQs,QJs,JTs",
                        "ATs,A5s,KJs,AQo",
                    ),
                ),
                (
                    "UTG+1",
                    OpenDefense::new(
                        EP_3BET,
                        "JJ,TT,99,88,77,AQs,AJs,KQs,QJs,JTs",
                        "ATs,A5s,KJs,AQo",
                    ),
                ),
                (
                    "UTG+2",
                    OpenDefense::new(
                        EP_3BET,
                        "JJ,TT,99,88,77,66,AQs,AJs,KQs,QJs,JTs,T9s",
                        "ATs,A5s,KJs,AQo,98s",
                    ),
                ),
            ]),
        );

        map.insert(
            "HJ",
            HashMap::from([
                (
                    "UTG",
                    OpenDefense::new(
                        EP_3BET,
                        "JJ,TT,99,88,77,AQs,AJs,KQs,QJs,JTs,T9s",
                        "ATs,A5s,KJs,AQo",
                    ),
                ),
                (
                    "UTG+1",
                    OpenDefense::new(
                        EP_3BET,
                        "JJ,TT,99,88,77,66,AQs,AJs,KQs,QJs,JTs,T9s",
                        "ATs,A5s,KJs,AQo",
                    ),
                ),
                (
                    "UTG+2",
                    OpenDefense::new(
                        EP_3BET,
                        "JJ,TT,99,88,77,66,55,AQs,AJs,KQs,QJs,JTs,T9s,98s",
                        "ATs,A5s,A4s,A3s,KJs,AQo,87s,76s",
                    ),
                ),
                (
                    "LJ",
                    OpenDefense::new(
                        EP_3BET,
                        "JJ,TT,99,88,77,66,55,AQs,AJs,ATs,KQs,KJs,QJs,\
                         JTs,T9s,98s,87s",
                        "A5s,A4s,A3s,A2s,AJo,KQo,76s,65s",
                    ),
                ),
            ]),
        );

        map.insert(
            "CO",
            HashMap::from([
                (
                    "UTG",
                    OpenDefense::new(
                        LP_3BET,
                        "JJ,TT,99,88,AJs,ATs,KQs,KJs,KTs,QJs,QTs,JTs,T9s,98s",
                        "A5s,AQo,AJo",
                    ),
                ),
                (
                    "UTG+1",
                    OpenDefense::new(
                        LP_3BET,
                        "JJ,TT,99,88,AJs,ATs,KQs,KJs,KTs,QJs,QTs,JTs,T9s,98s",
                        "A5s,AQo,AJo",
                    ),
                ),
                (
                    "UTG+2",
                    OpenDefense::new(
                        LP_3BET,
                        "JJ,TT,99,88,77,AJs,ATs,KQs,KJs,KTs,QJs,QTs,JTs,T9s,98s",
                        "A5s,AQo,AJo",
                    ),
                ),
                (
                    "LJ",
                    OpenDefense::new(
                        LP_3BET,
                        "JJ,TT,99,88,77,66,55,AJs,ATs,KQs,KJs,KTs,\
                         QJs,QTs,Q9s,JTs,J9s,T9s,T8s,98s,87s",
                        "A5s,AQo,AJo,KQo,76s",
                    ),
                ),
                (
                    "HJ",
                    OpenDefense::new(
                        LP_3BET,
                        "JJ,TT,99,88,77,66,55,44,33,22,\
                         AJs,ATs,A9s,A8s,KQs,KJs,KTs,K9s,QJs,QTs,Q9s,\
                         JTs,J9s,T9s,T8s,98s,87s,76s,75s",
                        "A5s,AQo,AJo,KQo",
                    ),
                ),
            ]),
        );

        map.insert(
            "BTN",
            HashMap::from([
                ("UTG", OpenDefense::new(LP_3BET, BTN_VS_EP_CALL, BTN_BLUFF)),
                ("UTG+1", OpenDefense::new(LP_3BET, BTN_VS_EP_CALL, BTN_BLUFF)),
                ("UTG+2", OpenDefense::new(LP_3BET, BTN_VS_EP_CALL, BTN_BLUFF)),
                ("LJ", OpenDefense::new(LP_3BET, BTN_VS_MP_CALL, BTN_BLUFF_WIDE)),
                (
                    "HJ",
                    OpenDefense::new(
                        LP_3BET,
                        "JJ,TT,99,88,77,66,55,44,33,22,\
                         AJs,ATs,A9s,A8s,KQs,KJs,KTs,K9s,QJs,QTs,Q9s,\
                         JTs,J9s,J8s,T9s,T8s,98s,97s,87s,76s",
                        BTN_BLUFF_WIDE,
                    ),
                ),
                (
                    "CO",
                    OpenDefense::new(
                        "AA,KK,QQ,AKs,AKo,AQs,AJs",
                        "JJ,TT,99,88,77,66,55,44,33,22,\
                         ATs,A9s,A8s,A7s,A6s,KQs,KJs,KTs,K9s,\
                         QJs,QTs,Q9s,Q8s,JTs,J9s,J8s,\
                         T9s,T8s,98s,97s,87s,76s",
                        BTN_BLUFF_WIDE,
                    ),
                ),
            ]),
        );

        map.insert(
            "SB",
            HashMap::from([
                ("UTG", OpenDefense::new(EP_3BET, SB_VS_EP_CALL, "A5s,AQo")),
                ("UTG+1", OpenDefense::new(EP_3BET, SB_VS_EP_CALL, "A5s,AQo")),
                (
                    "UTG+2",
                    OpenDefense::new(
                        EP_3BET,
                        "JJ,TT,99,AQs,AJs,ATs,A9s,KQs,KJs,QJs,JTs,T9s",
                        "A5s,AQo,98s",
                    ),
                ),
                (
                    "LJ",
                    OpenDefense::new(
                        LP_3BET,
                        "JJ,TT,99,88,AJs,ATs,A9s,KQs,KJs,QJs,JTs,T9s,98s,87s",
                        "A5s,AQo,AJo",
                    ),
                ),
                (
                    "HJ",
                    OpenDefense::new(
                        LP_3BET,
                        "JJ,TT,99,88,77,66,55,AJs,ATs,A9s,A8s,KQs,KJs,KTs,\
                         QJs,QTs,JTs,J9s,T9s,T8s,98s,87s,76s",
                        "A5s,AQo,AJo,KQo,QJo",
                    ),
                ),
                // vs CO and BTN the SB plays 3bet-or-fold.
                (
                    "CO",
                    OpenDefense::new(
                        "AA,KK,QQ,JJ,AKs,AKo,AQs,AQo,AJs,AJo,KQs,KQo",
                        "",
                        "TT,99,88,77,66,55,44,33,22,\
                         ATs,A9s,A8s,A7s,A6s,A5s,A4s,\
                         KJs,KJo,QJs,QJo,JTs,T9s,98s",
                    ),
                ),
                (
                    "BTN",
                    OpenDefense::new(
                        "AA,KK,QQ,JJ,TT,AKs,AQs,AJs,ATs,KQs,KJs,AKo,AQo,AJo,KQo",
                        "",
                        "99,88,77,66,55,44,33,22,\
                         A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
                         KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
                         QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
                         JTs,J9s,J8s,J7s,J6s,T9s,T8s,T7s,T6s,\
                         98s,97s,96s,87s,86s,85s,76s,75s,74s,\
                         65s,64s,54s,53s,43s,32s,\
                         ATo,KJo,QJo",
                    ),
                ),
            ]),
        );

        map.insert(
            "BB",
            HashMap::from([
                (
                    "UTG",
                    OpenDefense::new(BB_VS_EP_3BET, BB_VS_EP_CALL, BB_VS_EP_BLUFF),
                ),
                (
                    "UTG+1",
                    OpenDefense::new(BB_VS_EP_3BET, BB_VS_EP_CALL, BB_VS_EP_BLUFF),
                ),
                (
                    "UTG+2",
                    OpenDefense::new(
                        "AA,KK,QQ,JJ,AKs,AQs,AKo",
                        "TT,99,88,77,66,55,44,33,22,\
                         AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
                         AQo,AJo,ATo,\
                         KQs,KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,KQo,KJo,KTo,\
                         QJs,QTs,Q9s,Q8s,Q7s,Q6s,QJo,QTo,\
                         JTs,J9s,J8s,J7s,J6s,JTo,\
                         T9s,T8s,T7s,T6s,98s,97s,96s,87s",
                        "86s,85s,76s,75s,74s,65s,64s,54s,53s,43s",
                    ),
                ),
                (
                    "LJ",
                    OpenDefense::new(
                        "AA,KK,QQ,JJ,TT,AKs,AQs,AJs,AKo,KQs",
                        "AQo,AJo,ATo,\
                         ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
                         KQo,KJo,KTo,\
                         KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
                         QJo,QTo,QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,\
                         JTo,JTs,J9s,J8s,J7s,J6s,J5s,\
                         T9s,T8s,T7s,T6s,T5s,\
                         99,98s,97s,96s,95s,88,87s,86s,77,76s,\
                         66,55,44,33,22",
                        "A9o,85s,75s,74s,65s,64s,54s,53s,43s",
                    ),
                ),
                (
                    "HJ",
                    OpenDefense::new(
                        "AA,KK,QQ,JJ,TT,AKs,AQs,AJs,KQs,AKo,AQo",
                        "99,88,77,66,55,44,33,22,\
                         ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,AJo,ATo,\
                         KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
                         KQo,KJo,KTo,\
                         QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,QJo,QTo,\
                         JTs,J9s,J8s,J7s,J6s,J5s,JTo,\
                         T9s,T8s,T7s,T6s,T5s,\
                         98s,97s,96s,95s,87s,86s",
                        "A9o,85s,76s,75s,74s,65s,64s,63s,54s,53s,43s,32s",
                    ),
                ),
                (
                    "CO",
                    OpenDefense::new(
                        "AA,KK,QQ,JJ,TT,\
                         AKs,AQs,AJs,ATs,KQs,KJs,QJs,\
                         AKo,AQo,AJo,KQo",
                        "99,88,77,66,55,44,33,22,\
                         A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
                         ATo,A9o,A8o,A5o,\
                         KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
                         KJo,KTo,K9o,\
                         QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,QJo,QTo,Q9o,\
                         JTs,J9s,J8s,J7s,J6s,J5s,J4s,JTo,J9o,\
                         T9s,T8s,T7s,T6s,T5s,T4s,T9o,\
                         98s,97s,96s,95s,94s,98o,87s,86s",
                        "A4o,A3o,85s,84s,76s,75s,74s,73s,\
                         65s,64s,63s,54s,53s,52s,43s,32s",
                    ),
                ),
                (
                    "SB",
                    OpenDefense::new(
                        "AA,AKo,AKs,AQo,AQs,AJo,AJs,ATs,\
                         KK,KQo,KQs,KJs,KTs,QQ,QJs,QTs,\
                         JJ,JTs,TT,99",
                        "ATo,A9o,A9s,A8o,A8s,A7o,A7s,A6o,\
                         A6s,A5o,A5s,A4o,A4s,A3o,A3s,A2s,\
                         KJo,KTo,K9o,K9s,K8o,K8s,K7o,K7s,\
                         K6o,K6s,K5o,K5s,K4o,K4s,K3s,K2s,\
                         QJo,QTo,Q9o,Q9s,Q8o,Q8s,Q7s,Q6s,\
                         Q5s,Q4s,JTo,J9o,J9s,J8o,J8s,J7o,\
                         J7s,J6s,J5s,J4s,T9o,T8o,T7o,T7s,\
                         T6o,T6s,T5s,T4s,98o,97o,97s,96o,\
                         96s,95s,94s,87o,86o,86s,85s,84s,\
                         77,76s,75s,74s,66,65s,64s,63s,\
                         55,54s,53s,52s,44,43s,42s,33,32s,22",
                        "A2o,K3o,K2o,Q4o,Q3o,Q2o,J9s,J5o,\
                         T9s,T8s,T5o,98s,87s,76o,76s,75o,\
                         65o,65s,64o,54o,54s",
                    ),
                ),
            ]),
        );

        map
    });

// ---------------------------------------------------------------------------
// Defense vs 3bet: DEFENSE_VS_3BET[opener][3bettor]
// ---------------------------------------------------------------------------

const OOP_4BET: &str = "AA,KK,AKs,AKo";
const WIDE_4BET: &str = "AA,KK,QQ,AKs,AKo";
const IP_4BET: &str = "AA,KK,QQ,JJ,AKs,AKo";
const LATE_4BET: &str = "AA,KK,QQ,JJ,TT,AKs,AKo";

const UTG_VS_LATE_CALL: &str = "AQs,AJs,ATs,KQs,KJs,AQo,QJs,JJ,JTs,TT,T9s,99,88,77";
const UTG_VS_LATE_BLUFF: &str = "A9s,A5s,KTs,QTs,98s";
const UTG_VS_BLIND_CALL: &str = "AQs,AJs,ATs,KQs,QJs,JJ,JTs,TT,T9s,99,98s,88,77,66";
const UTG_VS_BLIND_BLUFF: &str = "A9s,A5s,KTs,QTs";

const UTG1_VS_MID_CALL: &str = "QQ,JJ,TT,99,88,77,66,AQs,AQo,AJs,ATs,KQs,KJs,\
    QJs,JTs,T9s,98s,87s";
const UTG1_VS_MID_BLUFF: &str = "A9s,A5s,A4s,AJo,KQo,KTs,QTs";
const UTG1_VS_MID_FOLD: &str = "A8s,A7s,A6s,K9s,Q9s,J9s,ATo";
const UTG1_VS_BLIND_CALL: &str = "AQs,AJs,ATs,KQs,KJs,KTs,AQo,QJs,QTs,AJo,\
    JJ,JTs,TT,T9s,99,98s,88,87s,77,66";
const UTG1_VS_BLIND_BLUFF: &str = "A9s,A8s,A5s,A4s,K9s,KQo,J9s,ATo";
const UTG1_VS_BLIND_FOLD: &str = "A7s,A6s,Q9s";

const UTG2_VS_BLIND_CALL: &str = "AQs,AJs,ATs,KQs,KJs,KTs,QQ,QJs,QTs,AQo,\
    JJ,JTs,TT,T9s,99,98s,88,87s,77,66,55";
const UTG2_VS_BLIND_BLUFF: &str = "A9s,A8s,A5s,A4s,A3s,A2s,AJo,KQo";
const UTG2_VS_BLIND_FOLD: &str = "A7s,A6s,K9s,Q9s,J9s,76s";

const LJ_VS_BLIND_CALL: &str = "AQs,AJs,ATs,KQs,KJs,KTs,AQo,AJo,KQo,\
    QJs,QTs,JTs,J9s,TT,T9s,99,98s,88,87s,77,76s,66,55";
const LJ_VS_BLIND_BLUFF: &str = "A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,ATo,KJo";

const HJ_VS_BLIND_BLUFF: &str = "A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,K8s,QJo,ATo";

const BTN_VS_BLIND_CALL: &str = "AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
    AQo,AJo,ATo,KQs,KJs,KTs,K9s,K8s,K7s,\
    QJs,QTs,Q9s,Q8s,Q7s,JTs,J9s,J8s,J7s,\
    T9s,T8s,T7s,T6s,99,98s,97s,96s,\
    88,87s,86s,85s,77,76s,75s,74s,\
    66,65s,64s,55,54s,44,33,22";
const BTN_VS_BLIND_BLUFF: &str = "K6s,K5s,K4s,QTo,Q9o,JTo,T9o,\
    A5o,A8o,86o,75o,65o,54o,A4o,A3o";
const BTN_VS_BLIND_FOLD: &str = "K3s,K2s,Q6s,Q5s,Q4s,Q3s,Q2s,J6s,\
    96s,85s,74s,A6o,A7o,KQo,K9o,K8o,\
    98o,87o,Q8o,J9o,T8o,A2o,A9o";

pub static DEFENSE_VS_3BET: Lazy<HashMap<&'static str, HashMap<&'static str, ThreeBetDefense>>> =
    Lazy::new(|| {
        let mut map: HashMap<&'static str, HashMap<&'static str, ThreeBetDefense>> =
            HashMap::new();

        map.insert(
            "UTG",
            HashMap::from([
                (
                    "UTG+1",
                    ThreeBetDefense::new(
                        "AA,AKs,AKo,KK",
                        "AQs,AJs,KQs,QQ,QJs,JJ,JTs,TT,99",
                        "ATs,AQo",
                        "A9s,A5s,KJs,KTs,QTs,T9s,98s,88,77,66",
                    ),
                ),
                (
                    "UTG+2",
                    ThreeBetDefense::new(
                        OOP_4BET,
                        "QQ,JJ,TT,AQs,AJs,KQs,QJs,JTs,T9s,99,98s,88",
                        "ATs,A9s,AQo",
                        "A5s,KJs,KTs,QTs,77,66",
                    ),
                ),
                (
                    "LJ",
                    ThreeBetDefense::new(
                        OOP_4BET,
                        "QQ,JJ,TT,AQs,AJs,KQs,QJs,JTs,T9s,99,88",
                        "ATs,AQo",
                        "A5s,KJs,KTs,QTs,98s,77,66",
                    ),
                ),
                (
                    "HJ",
                    ThreeBetDefense::new(
                        OOP_4BET,
                        "QQ,JJ,TT,AQs,AJs,KQs,QJs,JTs,T9s,99,88,77",
                        "ATs,A9s,AQo",
                        "A5s,KJs,KTs,QTs,98s,66",
                    ),
                ),
                (
                    "CO",
                    ThreeBetDefense::new(WIDE_4BET, UTG_VS_LATE_CALL, UTG_VS_LATE_BLUFF, "66"),
                ),
                (
                    "BTN",
                    ThreeBetDefense::new(WIDE_4BET, UTG_VS_LATE_CALL, UTG_VS_LATE_BLUFF, "66"),
                ),
                (
                    "SB",
                    ThreeBetDefense::new(WIDE_4BET, UTG_VS_BLIND_CALL, UTG_VS_BLIND_BLUFF, ""),
                ),
                (
                    "BB",
                    ThreeBetDefense::new(WIDE_4BET, UTG_VS_BLIND_CALL, UTG_VS_BLIND_BLUFF, ""),
                ),
            ]),
        );

        map.insert(
            "UTG+1",
            HashMap::from([
                (
                    "UTG+2",
                    ThreeBetDefense::new(
                        OOP_4BET,
                        "QQ,JJ,TT,99,88,77,AQs,AJs,KQs,KJs,QJs,JTs,T9s",
                        "ATs,A9s,A5s,AJo,AQo",
                        "A8s,A7s,A6s,A4s,KTs,K9s,KQo,QTs,Q9s,J9s,ATo,98s,87s,66",
                    ),
                ),
                (
                    "LJ",
                    ThreeBetDefense::new(
                        OOP_4BET,
                        "QQ,JJ,TT,99,88,77,AQs,AQo,AJs,ATs,KQs,KJs,QJs,JTs,T9s",
                        "A9s,A5s,A4s,AJo,KTs,QTs",
                        "A8s,A7s,A6s,ATo,KQo,K9s,Q9s,J9s,98s,87s,66",
                    ),
                ),
                (
                    "HJ",
                    ThreeBetDefense::new(
                        OOP_4BET,
                        UTG1_VS_MID_CALL,
                        UTG1_VS_MID_BLUFF,
                        UTG1_VS_MID_FOLD,
                    ),
                ),
                (
                    "CO",
                    ThreeBetDefense::new(
                        OOP_4BET,
                        UTG1_VS_MID_CALL,
                        UTG1_VS_MID_BLUFF,
                        UTG1_VS_MID_FOLD,
                    ),
                ),
                (
                    "BTN",
                    ThreeBetDefense::new(
                        OOP_4BET,
                        "AQs,AJs,ATs,AQo,AJo,KQs,KJs,QQ,QJs,JJ,JTs,\
                         TT,T9s,99,98s,88,87s,77,66",
                        "A9s,A5s,A4s,KTs,QTs,KQo,J9s,ATo",
                        "A8s,A7s,A6s,K9s,Q9s",
                    ),
                ),
                (
                    "SB",
                    ThreeBetDefense::new(
                        WIDE_4BET,
                        UTG1_VS_BLIND_CALL,
                        UTG1_VS_BLIND_BLUFF,
                        UTG1_VS_BLIND_FOLD,
                    ),
                ),
                (
                    "BB",
                    ThreeBetDefense::new(
                        WIDE_4BET,
                        UTG1_VS_BLIND_CALL,
                        UTG1_VS_BLIND_BLUFF,
                        UTG1_VS_BLIND_FOLD,
                    ),
                ),
            ]),
        );

        map.insert(
            "UTG+2",
            HashMap::from([
                (
                    "LJ",
                    ThreeBetDefense::new(
                        OOP_4BET,
                        "QQ,JJ,TT,99,88,77,AQs,AQo,AJs,ATs,KQs,KJs,QJs,JTs,T9s,98s",
                        "A9s,A5s,A4s,A3s,A2s,AJo,KQo",
                        "A8s,A7s,A6s,KTs,K9s,QTs,Q9s,J9s,87s,76s,66,55",
                    ),
                ),
                (
                    "HJ",
                    ThreeBetDefense::new(
                        OOP_4BET,
                        "AQs,AJs,ATs,KQs,KJs,AQo,QQ,QJs,JJ,JTs,TT,T9s,99,98s,88,77,66",
                        "A9s,A5s,A4s,A3s,A2s,KQo,AJo,87s",
                        "A8s,A7s,A6s,KTs,K9s,QTs,Q9s,J9s,76s,55",
                    ),
                ),
                (
                    "SB",
                    ThreeBetDefense::new(
                        WIDE_4BET,
                        UTG2_VS_BLIND_CALL,
                        UTG2_VS_BLIND_BLUFF,
                        UTG2_VS_BLIND_FOLD,
                    ),
                ),
                (
                    "BB",
                    ThreeBetDefense::new(
                        WIDE_4BET,
                        UTG2_VS_BLIND_CALL,
                        UTG2_VS_BLIND_BLUFF,
                        UTG2_VS_BLIND_FOLD,
                    ),
                ),
            ]),
        );

        map.insert(
            "LJ",
            HashMap::from([
                (
                    "HJ",
                    ThreeBetDefense::new(
                        WIDE_4BET,
                        "AQs,AJs,ATs,KQs,KJs,KTs,AQo,QJs,QTs,\
                         JJ,JTs,TT,T9s,99,98s,88,77",
                        "A9s,A8s,A5s,A4s,A3s,A2s,AJo,KQo",
                        "A7s,A6s,ATo,K9s,KJo,Q9s,J9s,87s,76s,65s,66,55,44",
                    ),
                ),
                (
                    "CO",
                    ThreeBetDefense::new(
                        IP_4BET,
                        "TT,99,88,77,66,AQs,AJs,ATs,KQs,KJs,KTs,\
                         QJs,QTs,JTs,T9s,98s,AQo",
                        "A9s,A8s,A5s,A4s,A3s,A2s,AJo,KQo,87s",
                        "A7s,A6s,ATo,KJo,K9s,Q9s,J9s,76s,65s,55,44",
                    ),
                ),
                (
                    "BTN",
                    ThreeBetDefense::new(
                        IP_4BET,
                        "AQs,AJs,ATs,KQs,KJs,KTs,AQo,QJs,QTs,JTs,\
                         TT,T9s,99,98s,88,87s,77,66,55",
                        "AJo,KQo,A9s,A8s,A7s,A5s,A4s,A3s,A2s,76s",
                        "ATo,KJo,A6s,K9s,Q9s,J9s,65s,44",
                    ),
                ),
                (
                    "SB",
                    ThreeBetDefense::new(
                        IP_4BET,
                        LJ_VS_BLIND_CALL,
                        LJ_VS_BLIND_BLUFF,
                        "K9s,Q9s,65s,44",
                    ),
                ),
                (
                    "BB",
                    ThreeBetDefense::new(
                        IP_4BET,
                        "AQs,AJs,ATs,KQs,KJs,KTs,AQo,AJo,KQo,\
                         QJs,QTs,JTs,J9s,TT,T9s,99,98s,\
                         88,87s,77,76s,66,55,44",
                        LJ_VS_BLIND_BLUFF,
                        "K9s,Q9s,65s",
                    ),
                ),
            ]),
        );

        map.insert(
            "HJ",
            HashMap::from([
                (
                    "CO",
                    ThreeBetDefense::new(
                        IP_4BET,
                        "AQs,AJs,ATs,KQs,KJs,KTs,K9s,AQo,AJo,KQo,\
                         QJs,QTs,Q9s,Q8s,JTs,J9s,J8s,\
                         TT,T9s,99,98s,88,87s,77,66,55",
                        "A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,KJo,ATo,76s",
                        "K8s,QJo,97s,65s,54s,44,33,22",
                    ),
                ),
                (
                    "BTN",
                    ThreeBetDefense::new(
                        IP_4BET,
                        "AQs,AJs,ATs,KQs,KJs,KTs,K9s,AQo,AJo,KQo,\
                         QJs,QTs,Q9s,Q8s,JTs,J9s,J8s,\
                         TT,T9s,T8s,99,98s,88,87s,77,76s,66,65s,55,54s,44",
                        "A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,K8s,QJo,KJo,ATo",
                        "97s,33,22",
                    ),
                ),
                (
                    "SB",
                    ThreeBetDefense::new(
                        IP_4BET,
                        "AQs,AJs,ATs,KQs,KJs,KTs,K9s,AQo,AJo,KQo,\
                         QJs,QTs,Q9s,JTs,J9s,\
                         TT,T9s,T8s,99,98s,88,87s,77,76s,66,55,44",
                        HJ_VS_BLIND_BLUFF,
                        "Q8s,97s,65s,54s,33,22",
                    ),
                ),
                (
                    "BB",
                    ThreeBetDefense::new(
                        IP_4BET,
                        "AQs,AJs,ATs,KQs,KJs,KTs,K9s,AQo,AJo,KQo,\
                         QJs,QTs,Q9s,Q8s,JTs,J9s,\
                         TT,T9s,T8s,99,98s,88,87s,77,76s,66,55,44",
                        HJ_VS_BLIND_BLUFF,
                        "97s,65s,54s,33,22",
                    ),
                ),
            ]),
        );

        map.insert(
            "CO",
            HashMap::from([(
                "BB",
                ThreeBetDefense::new(
                    LATE_4BET,
                    "AQs,AJs,ATs,A9s,A5s,AQo,AJo,\
                     KQs,KJs,KTs,K9s,KQo,QJs,QTs,Q9s,\
                     JTs,J9s,T9s,99,98s,88,87s,77,76s,66,55,44",
                    "A8s,A4s,A3s,A2s,KJo,ATo,T8s,97s,65s,54s",
                    "A7s,A6s,K8s,K7s,Q8s,QJo,J8s,KTo,QTo,JTo,A9o,\
                     86s,75s,64s,43s,33,22",
                ),
            )]),
        );

        map.insert(
            "BTN",
            HashMap::from([
                (
                    "SB",
                    ThreeBetDefense::new(
                        LATE_4BET,
                        BTN_VS_BLIND_CALL,
                        BTN_VS_BLIND_BLUFF,
                        BTN_VS_BLIND_FOLD,
                    ),
                ),
                (
                    "BB",
                    ThreeBetDefense::new(
                        LATE_4BET,
                        BTN_VS_BLIND_CALL,
                        BTN_VS_BLIND_BLUFF,
                        BTN_VS_BLIND_FOLD,
                    ),
                ),
            ]),
        );

        map
    });

/// SB open 3bet by BB, played with its own table.
pub static DEFENSE_VS_3BET_SB_VS_BB: Lazy<ThreeBetDefense> = Lazy::new(|| {
    ThreeBetDefense::new(
        "AA,KK,QQ,JJ,AKs,AKo,AQs",
        "TT,99,88,77,66,55,44,33,22,AQo,\
         AJs,ATs,A9s,A8s,A7s,A6s,\
         KQs,KJs,KTs,QJs,QTs,JTs,\
         T9s,98s,87s,76s,65s,54s",
        "A5s,A4s,A3s,A2s,AJo,KQo",
        "",
    )
});

// ---------------------------------------------------------------------------
// ICM push/fold, 9-max
// ---------------------------------------------------------------------------

// UTG and UTG+1 share the full 1-5bb jam range.
const EP_PUSH_1_5BB: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
    AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
    KQs,KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
    QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
    JTs,J9s,J8s,J7s,J6s,J5s,J4s,J3s,J2s,\
    T9s,T8s,T7s,T6s,T5s,T4s,T3s,T2s,\
    98s,97s,96s,95s,94s,93s,92s,\
    87s,86s,85s,84s,83s,82s,\
    76s,75s,74s,73s,72s,65s,64s,63s,62s,\
    54s,53s,52s,43s,42s,32s,\
    AKo,AQo,AJo,ATo,A9o,A8o,A7o,A6o,A5o,A4o,A3o,A2o,\
    KQo,KJo,KTo,K9o,K8o,K7o,K6o,K5o,K4o,K3o,K2o,\
    QJo,QTo,Q9o,Q8o,Q7o,Q6o,Q5o,Q4o,Q3o,Q2o,\
    JTo,J9o,J8o,J7o,J6o,T9o,T8o,T7o,98o,87o,76o";

const OFFSUIT_JUNK_LT5BB: &str = "AKo,AQo,AJo,ATo,A9o,A8o,A7o,A6o,A5o,A4o,A3o,A2o,\
    KQo,KJo,KTo,K9o,K8o,K7o,K6o,K5o,K4o,K3o,K2o,\
    QJo,QTo,Q9o,Q8o,Q7o,Q6o,Q5o,Q4o,Q3o,Q2o,\
    JTo,J9o,J8o,J7o,J6o,T9o,T8o,T7o,98o,87o,76o";

// SB jams everything at 5bb and below; the sub-5bb list adds 95o.
const SB_PUSH_5BB: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
    AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
    KQs,KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
    QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
    JTs,J9s,J8s,J7s,J6s,J5s,J4s,J3s,J2s,\
    T9s,T8s,T7s,T6s,T5s,T4s,T3s,T2s,\
    98s,97s,96s,95s,94s,93s,92s,87s,86s,85s,84s,83s,82s,\
    76s,75s,74s,73s,72s,65s,64s,63s,62s,\
    54s,53s,52s,43s,42s,32s,\
    AKo,AQo,AJo,ATo,A9o,A8o,A7o,A6o,A5o,A4o,A3o,A2o,\
    KQo,KJo,KTo,K9o,K8o,K7o,K6o,K5o,K4o,K3o,K2o,\
    QJo,QTo,Q9o,Q8o,Q7o,Q6o,Q5o,Q4o,Q3o,Q2o,\
    JTo,J9o,J8o,J7o,J6o,J5o,J4o,J3o,J2o,\
    T9o,T8o,T7o,T6o,T5o,T4o,\
    98o,97o,96o,87o,86o,85o,76o,65o";

const SB_PUSH_LT5BB: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
    AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
    KQs,KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
    QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
    JTs,J9s,J8s,J7s,J6s,J5s,J4s,J3s,J2s,\
    T9s,T8s,T7s,T6s,T5s,T4s,T3s,T2s,\
    98s,97s,96s,95s,94s,93s,92s,87s,86s,85s,84s,83s,82s,\
    76s,75s,74s,73s,72s,65s,64s,63s,62s,\
    54s,53s,52s,43s,42s,32s,\
    AKo,AQo,AJo,ATo,A9o,A8o,A7o,A6o,A5o,A4o,A3o,A2o,\
    KQo,KJo,KTo,K9o,K8o,K7o,K6o,K5o,K4o,K3o,K2o,\
    QJo,QTo,Q9o,Q8o,Q7o,Q6o,Q5o,Q4o,Q3o,Q2o,\
    JTo,J9o,J8o,J7o,J6o,J5o,J4o,J3o,J2o,\
    T9o,T8o,T7o,T6o,T5o,T4o,\
    98o,97o,96o,95o,87o,86o,85o,76o,65o";

// 6-10bb: the 6-9bb subset doubles as the full range.
const UTG1_PUSH_6_9BB: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,\
    AKs,AQs,AJs,ATs,A9s,A8s,A5s,A4s,\
    KQs,KJs,KTs,K9s,QJs,QTs,Q9s,JTs,T9s,\
    AKo,AQo,AJo,ATo,KQo";

const UTG2_PUSH_6_9BB: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,\
    AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,\
    KQs,KJs,KTs,K9s,QJs,QTs,Q9s,JTs,J9s,T9s,\
    AKo,AQo,AJo,ATo,KQo";

const LJ_PUSH_6_9BB: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
    AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
    KQs,KJs,KTs,K9s,QJs,QTs,Q9s,JTs,J9s,T9s,T8s,98s,\
    AKo,AQo,AJo,ATo,A9o,A8o,A7o,KQo,KJo,QJo";

const SB_PUSH_6_9BB: &str = "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
    AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
    KQs,KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
    QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
    JTs,J9s,J8s,J7s,J6s,J5s,J4s,J3s,J2s,\
    T9s,T8s,T7s,T6s,T5s,T4s,T3s,T2s,\
    98s,97s,96s,95s,94s,93s,92s,87s,86s,85s,84s,83s,82s,\
    76s,75s,74s,73s,72s,65s,64s,63s,62s,\
    54s,53s,52s,43s,42s,32s,\
    AKo,AQo,AJo,ATo,A9o,A8o,A7o,A6o,A5o,A4o,A3o,A2o,\
    KQo,KJo,KTo,K9o,K8o,K7o,K6o,K5o,K4o,K3o,K2o,\
    QJo,QTo,Q9o,Q8o,Q7o,Q6o,Q5o,Q4o,Q3o,Q2o,\
    JTo,J9o,J8o,J7o,J6o,T9o,T8o,T7o,\
    98o,97o,87o,76o,65o,54o";

fn push_1_5bb(
    push: &'static str,
    push_5bb: &'static str,
    push_lt5bb: &'static str,
) -> PushRanges {
    PushRanges {
        push: hands(push),
        push_5bb: hands(push_5bb),
        push_lt5bb: hands(push_lt5bb),
        ..Default::default()
    }
}

fn push_only(push: &'static str) -> PushRanges {
    PushRanges {
        push: hands(push),
        ..Default::default()
    }
}

fn push_6_10bb(push_10bb: &'static str, push_6_9bb: &'static str) -> PushRanges {
    PushRanges {
        push: hands(push_6_9bb),
        push_10bb: hands(push_10bb),
        push_6_9bb: hands(push_6_9bb),
        ..Default::default()
    }
}

static ICM_PUSH_FOLD_1_5BB: Lazy<HashMap<&'static str, PushRanges>> = Lazy::new(|| {
    HashMap::from([
        (
            "UTG",
            push_1_5bb(
                EP_PUSH_1_5BB,
                "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
                 AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,\
                 KQs,KJs,KTs,K9s,QJs,QTs,JTs,T9s",
                "A2s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
                 Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
                 J9s,J8s,J7s,J6s,J5s,J4s,J3s,J2s,\
                 T8s,T7s,T6s,T5s,T4s,T3s,T2s,\
                 98s,97s,96s,95s,94s,93s,92s,\
                 87s,86s,85s,84s,83s,82s,\
                 76s,75s,74s,73s,72s,65s,64s,63s,62s,\
                 54s,53s,52s,43s,42s,32s,\
                 AKo,AQo,AJo,ATo,A9o,A8o,A7o,A6o,A5o,A4o,A3o,A2o,\
                 KQo,KJo,KTo,K9o,K8o,K7o,K6o,K5o,K4o,K3o,K2o,\
                 QJo,QTo,Q9o,Q8o,Q7o,Q6o,Q5o,Q4o,Q3o,Q2o,\
                 JTo,J9o,J8o,J7o,J6o,T9o,T8o,T7o,98o,87o,76o",
            ),
        ),
        (
            "UTG+1",
            push_1_5bb(
                EP_PUSH_1_5BB,
                "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,\
                 AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,\
                 KQs,KJs,KTs,K9s,QJs,QTs,JTs,T9s",
                "22,A3s,A2s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
                 Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
                 J9s,J8s,J7s,J6s,J5s,J4s,J3s,J2s,\
                 T8s,T7s,T6s,T5s,T4s,T3s,T2s,\
                 98s,97s,96s,95s,94s,93s,92s,\
                 87s,86s,85s,84s,83s,82s,\
                 76s,75s,74s,73s,72s,65s,64s,63s,62s,\
                 54s,53s,52s,43s,42s,32s,\
                 AKo,AQo,AJo,ATo,A9o,A8o,A7o,A6o,A5o,A4o,A3o,A2o,\
                 KQo,KJo,KTo,K9o,K8o,K7o,K6o,K5o,K4o,K3o,K2o,\
                 QJo,QTo,Q9o,Q8o,Q7o,Q6o,Q5o,Q4o,Q3o,Q2o,\
                 JTo,J9o,J8o,J7o,J6o,T9o,T8o,T7o,98o,87o,76o",
            ),
        ),
        (
            "UTG+2",
            push_1_5bb(
                "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
                 AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
                 KQs,KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
                 QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
                 JTs,J9s,J8s,J7s,J6s,J5s,J4s,J3s,J2s,\
                 T9s,T8s,T7s,T6s,T5s,T4s,T3s,T2s,\
                 98s,97s,96s,95s,94s,93s,\
                 87s,86s,85s,84s,83s,76s,75s,74s,\
                 65s,64s,63s,54s,53s,43s,\
                 AKo,AQo,AJo,ATo,A9o,A8o,A7o,A6o,A5o,A4o,A3o,A2o,\
                 KQo,KJo,KTo,K9o,K8o,K7o,K6o,K5o,K4o,K3o,K2o,\
                 QJo,QTo,Q9o,Q8o,Q7o,Q6o,Q5o,Q4o,Q3o,\
                 JTo,J9o,J8o,J7o,J6o,T9o,T8o,T7o,98o,87o,76o",
                "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,\
                 AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,\
                 KQs,KJs,KTs,K9s,QJs,QTs,Q9s,JTs,J9s,T9s,\
                 AKo,AQo,AJo,ATo,A9o,KQo,KJo",
                "22,A2s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
                 Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
                 J8s,J7s,J6s,J5s,J4s,J3s,J2s,\
                 T8s,T7s,T6s,T5s,T4s,T3s,T2s,\
                 98s,97s,96s,95s,94s,93s,\
                 87s,86s,85s,84s,83s,76s,75s,74s,\
                 65s,64s,63s,54s,53s,43s,\
                 A8o,A7o,A6o,A5o,A4o,A3o,A2o,\
                 KTo,K9o,K8o,K7o,K6o,K5o,K4o,K3o,K2o,\
                 QJo,QTo,Q9o,Q8o,Q7o,Q6o,Q5o,Q4o,Q3o,\
                 JTo,J9o,J8o,J7o,J6o,T9o,T8o,T7o,98o,87o,76o",
            ),
        ),
        (
            "LJ",
            push_only(
                "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
                 AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
                 KQs,KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
                 QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
                 JTs,J9s,J8s,J7s,J6s,J5s,J4s,J3s,J2s,\
                 T9s,T8s,T7s,T6s,T5s,T4s,T3s,T2s,\
                 98s,97s,96s,95s,94s,93s,87s,86s,85s,84s,\
                 76s,75s,74s,65s,64s,63s,54s,\
                 AKo,AQo,AJo,ATo,A9o,A8o,A7o,A6o,A5o,A4o,A3o,A2o,\
                 KQo,KJo,KTo,K9o,K8o,K7o,K6o,K5o,K4o,K3o,K2o,\
                 QJo,QTo,Q9o,Q8o,Q7o,Q6o,Q5o,Q4o,Q3o,\
                 JTo,J9o,J8o,J7o,J6o,J5o,J4o,\
                 T9o,T8o,T7o,T6o,98o,97o,96o,87o,86o,76o",
            ),
        ),
        (
            "HJ",
            push_only(
                "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
                 AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
                 KQs,KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
                 QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
                 JTs,J9s,J8s,J7s,J6s,J5s,J4s,J3s,J2s,\
                 T9s,T8s,T7s,T6s,T4s,T3s,T2s,\
                 98s,97s,96s,94s,93s,87s,86s,85s,84s,\
                 76s,75s,74s,65s,64s,63s,54s,\
                 AKo,AQo,AJo,ATo,A9o,A8o,A7o,A6o,A5o,A3o,A2o,\
                 KQo,KJo,KTo,K9o,K8o,K7o,K6o,K5o,K3o,K2o,\
                 QJo,QTo,Q9o,Q8o,Q7o,Q6o,Q5o,Q4o,Q3o,Q2o,\
                 JTo,J9o,J8o,J7o,J6o,J5o,\
                 T9o,T8o,T7o,T6o,98o,97o,96o,87o,86o,76o",
            ),
        ),
        (
            "CO",
            push_only(
                "AA,AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,AKo,\
                 KK,KQs,KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,AQo,KQo,\
                 QQ,QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,AJo,KJo,QJo,\
                 JJ,JTs,J9s,J8s,J7s,J6s,J5s,J4s,J3s,J2s,ATo,KTo,QTo,JTo,\
                 TT,T9s,T8s,T7s,T6s,T5s,T4s,T3s,T2s,A9o,K9o,Q9o,J9o,T9o,\
                 99,98s,97s,96s,95s,94s,93s,A8o,K8o,Q8o,J8o,T8o,98o,\
                 88,87s,86s,85s,84s,A7o,K7o,Q7o,J7o,T7o,97o,87o,\
                 77,76s,75s,74s,A6o,K6o,Q6o,J6o,T6o,96o,86o,76o,\
                 66,65s,64s,A5o,K5o,Q5o,J5o,55,54s,A4o,K4o,Q4o,\
                 44,A3o,K3o,Q3o,33,A2o,K2o,Q2o,22",
            ),
        ),
        (
            "BTN",
            push_only(
                "22,33,44,53s,54s,55,63s,64s,65o,66,\
                 74s,75s,76o,76s,77,84s,85o,86o,86s,87o,\
                 87s,88,92s,93s,94s,95o,96o,96s,97o,97s,\
                 98o,98s,99,A2o,A2s,A3o,A3s,A4o,A4s,A5o,\
                 A5s,A6o,A6s,A7o,A7s,A8o,A8s,A9o,A9s,AA,\
                 AJo,AJs,AKo,AKs,AQo,AQs,ATo,ATs,J4s,J5o,\
                 J5s,J6o,J6s,J7o,J7s,J8o,J8s,J9o,J9s,JJ,\
                 JTo,JTs,K2o,K2s,K3o,K3s,K4o,K4s,K5o,K5s,\
                 K6o,K6s,K7o,K7s,K8o,K8s,K9o,K9s,KJo,KJs,\
                 KK,KQo,KQs,KTo,KTs,Q2o,Q2s,Q3o,Q3s,Q4o,\
                 Q4s,Q5o,Q5s,Q6o,Q6s,Q7o,Q7s,Q8o,Q8s,Q9o,\
                 Q9s,QJo,QJs,QQ,QTo,QTs,T4o,T4s,T6o,T6s,\
                 T7o,T7s,T8o,T8s,T9o,T9s,TT",
            ),
        ),
        (
            "SB",
            push_1_5bb(SB_PUSH_LT5BB, SB_PUSH_5BB, SB_PUSH_LT5BB),
        ),
    ])
});

static ICM_PUSH_FOLD_6_10BB: Lazy<HashMap<&'static str, PushRanges>> = Lazy::new(|| {
    HashMap::from([
        (
            "UTG+1",
            push_6_10bb(
                "AA,KK,QQ,JJ,TT,99,88,77,AKs,AQs,AJs,ATs,\
                 A9s,A5s,A4s,KQs,KJs,KTs,QJs,QTs,JTs,AKo,AQo",
                UTG1_PUSH_6_9BB,
            ),
        ),
        (
            "UTG+2",
            push_6_10bb(
                "AA,KK,QQ,JJ,TT,99,88,77,66,55,AKs,AQs,\
                 AJs,ATs,A9s,A5s,KQs,KJs,KTs,QJs,QTs,JTs,\
                 AKo,AQo,AJo",
                UTG2_PUSH_6_9BB,
            ),
        ),
        (
            "LJ",
            push_6_10bb(
                "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,\
                 AKs,AQs,AJs,ATs,A9s,A8s,A7s,A5s,\
                 KQs,KJs,KTs,K9s,QJs,QTs,Q9s,JTs,J9s,T9s,\
                 AKo,AQo,AJo,ATo,KQo,KJo",
                LJ_PUSH_6_9BB,
            ),
        ),
        (
            "SB",
            push_6_10bb(
                "AA,KK,QQ,JJ,TT,99,88,77,66,55,44,33,22,\
                 AKs,AQs,AJs,ATs,A9s,A8s,A7s,A6s,A5s,A4s,A3s,A2s,\
                 KQs,KJs,KTs,K9s,K8s,K7s,K6s,K5s,K4s,K3s,K2s,\
                 QJs,QTs,Q9s,Q8s,Q7s,Q6s,Q5s,Q4s,Q3s,Q2s,\
                 JTs,J9s,J8s,J7s,J6s,J5s,J4s,J3s,J2s,\
                 T9s,T8s,T7s,T6s,T5s,T4s,T3s,T2s,\
                 98s,97s,96s,95s,94s,93s,92s,87s,86s,85s,84s,83s,82s,\
                 76s,75s,74s,73s,72s,65s,64s,63s,62s,\
                 54s,53s,52s,42s,32s,\
                 AKo,AQo,AJo,ATo,A9o,A8o,A7o,A6o,A5o,A4o,A3o,A2o,\
                 KQo,KJo,KTo,K9o,K8o,K7o,K6o,K5o,K4o,K3o,K2o,\
                 QJo,QTo,Q9o,Q8o,JTo,J9o,J8o,\
                 T9o,T8o,T7o,98o,97o,87o,76o,65o,54o",
                SB_PUSH_6_9BB,
            ),
        ),
    ])
});

// 10-15bb and 16-20bb charts are declared without data; lookups there fall
// back to the premium jam range in the engine.
static ICM_PUSH_FOLD_10_15BB: Lazy<HashMap<&'static str, PushRanges>> = Lazy::new(HashMap::new);
static ICM_PUSH_FOLD_16_20BB: Lazy<HashMap<&'static str, PushRanges>> = Lazy::new(HashMap::new);

pub static ICM_PUSH_FOLD: Lazy<HashMap<&'static str, &'static HashMap<&'static str, PushRanges>>> =
    Lazy::new(|| {
        HashMap::from([
            ("1-5bb", &*ICM_PUSH_FOLD_1_5BB),
            ("6-10bb", &*ICM_PUSH_FOLD_6_10BB),
            ("10-15bb", &*ICM_PUSH_FOLD_10_15BB),
            ("16-20bb", &*ICM_PUSH_FOLD_16_20BB),
        ])
    });

// ---------------------------------------------------------------------------
// Lookup helpers
// ---------------------------------------------------------------------------

pub fn open_range(position: &str) -> Option<&'static HandSet> {
    OPEN_RANGES.get(position)
}

pub fn defense_vs_open(defender: &str, opener: &str) -> Option<&'static OpenDefense> {
    DEFENSE_VS_OPEN.get(defender)?.get(opener)
}

/// 3bet defense table for an opener, including the SB vs BB special case.
pub fn defense_vs_3bet(opener: &str, three_bettor: &str) -> Option<&'static ThreeBetDefense> {
    if opener == "SB" && three_bettor == "BB" {
        return Some(&DEFENSE_VS_3BET_SB_VS_BB);
    }
    DEFENSE_VS_3BET.get(opener)?.get(three_bettor)
}

pub fn push_ranges(bucket: &str, position: &str) -> Option<&'static PushRanges> {
    ICM_PUSH_FOLD.get(bucket)?.get(position)
}

pub fn stack_bucket(stack_bb: f64) -> &'static str {
    if stack_bb <= 5.0 {
        "1-5bb"
    } else if stack_bb <= 10.0 {
        "6-10bb"
    } else if stack_bb <= 15.0 {
        "10-15bb"
    } else if stack_bb <= 20.0 {
        "16-20bb"
    } else {
        "deep"
    }
}

/// Push/fold territory.
pub fn is_short_stack(stack_bb: f64) -> bool {
    stack_bb <= 10.0
}

pub fn is_icm_zone(stack_bb: f64) -> bool {
    stack_bb <= 20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_range_membership() {
        let utg = open_range("UTG").unwrap();
        assert!(utg.contains("AA"));
        assert!(utg.contains("A5s"));
        assert!(!utg.contains("A4s"));
        assert!(!utg.contains("72o"));

        let btn = open_range("BTN").unwrap();
        assert!(btn.contains("K2s"));
        assert!(btn.contains("76o"));
        assert!(!btn.contains("72o"));

        assert!(open_range("BB").is_none());
    }

    #[test]
    fn test_open_ranges_widen_toward_button() {
        let utg = open_range("UTG").unwrap();
        let co = open_range("CO").unwrap();
        let btn = open_range("BTN").unwrap();
        assert!(utg.len() < co.len());
        assert!(co.len() < btn.len());
    }

    #[test]
    fn test_defense_vs_open_lookup() {
        let d = defense_vs_open("BB", "UTG").unwrap();
        assert!(d.three_bet.contains("AA"));
        assert!(d.call.contains("22"));
        assert!(d.three_bet_bluff.contains("54s"));

        // SB flats nothing against a CO open.
        let d = defense_vs_open("SB", "CO").unwrap();
        assert!(d.call.is_empty());
        assert!(d.three_bet_bluff.contains("22"));

        assert!(defense_vs_open("UTG", "BTN").is_none());
    }

    #[test]
    fn test_defense_vs_3bet_lookup() {
        let d = defense_vs_3bet("UTG", "UTG+1").unwrap();
        assert!(d.four_bet.contains("KK"));
        assert!(d.fold.contains("66"));

        let sb_bb = defense_vs_3bet("SB", "BB").unwrap();
        assert!(sb_bb.four_bet.contains("AQs"));
        assert!(sb_bb.four_bet_bluff.contains("A5s"));
        assert!(sb_bb.call.contains("22"));

        assert!(defense_vs_3bet("BB", "SB").is_none());
    }

    #[test]
    fn test_stack_buckets() {
        assert_eq!(stack_bucket(0.5), "1-5bb");
        assert_eq!(stack_bucket(5.0), "1-5bb");
        assert_eq!(stack_bucket(5.1), "6-10bb");
        assert_eq!(stack_bucket(10.0), "6-10bb");
        assert_eq!(stack_bucket(12.0), "10-15bb");
        assert_eq!(stack_bucket(18.0), "16-20bb");
        assert_eq!(stack_bucket(50.0), "deep");
    }

    #[test]
    fn test_short_stack_threshold() {
        assert!(is_short_stack(10.0));
        assert!(!is_short_stack(10.5));
        assert!(is_icm_zone(20.0));
        assert!(!is_icm_zone(21.0));
    }

    #[test]
    fn test_push_ranges() {
        let sb = push_ranges("1-5bb", "SB").unwrap();
        assert!(sb.push.contains("72s"));
        assert!(sb.push_lt5bb.contains("95o"));
        assert!(!sb.push_5bb.contains("95o"));

        let utg1 = push_ranges("6-10bb", "UTG+1").unwrap();
        assert!(utg1.push_10bb.contains("AA"));
        assert!(!utg1.push_10bb.contains("44"));
        assert!(utg1.push_6_9bb.contains("44"));

        // Buckets without data are empty, not missing entries for known
        // positions.
        assert!(push_ranges("10-15bb", "UTG").is_none());
        assert!(push_ranges("1-5bb", "BB").is_none());
    }
}
