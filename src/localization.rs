use std::collections::HashMap;
use std::sync::LazyLock;

/// `Accept-Language` value used when no language is requested or it is unknown
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Language code to `Accept-Language` header value. Keys are lower case.
const LANGUAGES: &[(&str, &str)] = &[
    // Core global languages
    ("en", DEFAULT_ACCEPT_LANGUAGE),
    ("fr", "fr-FR,fr;q=0.9,en;q=0.8"),
    ("de", "de-DE,de;q=0.9,en;q=0.8"),
    ("es", "es-ES,es;q=0.9,en;q=0.8"),
    ("it", "it-IT,it;q=0.9,en;q=0.8"),
    ("pt", "pt-BR,pt;q=0.9,en;q=0.8"),
    ("ru", "ru-RU,ru;q=0.9,en;q=0.8"),
    ("zh", "zh-CN,zh;q=0.9,en;q=0.8"),
    ("zh-tw", "zh-TW,zh;q=0.9,en;q=0.8"),
    ("ja", "ja-JP,ja;q=0.9,en;q=0.8"),
    ("ko", "ko-KR,ko;q=0.9,en;q=0.8"),
    ("ar", "ar-SA,ar;q=0.9,en;q=0.8"),
    ("hi", "hi-IN,hi;q=0.9,en;q=0.8"),
    // African
    ("sw", "sw-KE,sw;q=0.9,en;q=0.8"),
    ("am", "am-ET,am;q=0.9,en;q=0.8"),
    ("yo", "yo-NG,yo;q=0.9,en;q=0.8"),
    ("ha", "ha-NE,ha;q=0.9,en;q=0.8"),
    ("zu", "zu-ZA,zu;q=0.9,en;q=0.8"),
    ("xh", "xh-ZA,xh;q=0.9,en;q=0.8"),
    ("st", "st-LS,st;q=0.9,en;q=0.8"),
    ("tn", "tn-BW,tn;q=0.9,en;q=0.8"),
    ("lg", "lg-UG,lg;q=0.9,en;q=0.8"),
    ("rw", "rw-RW,rw;q=0.9,en;q=0.8"),
    ("so", "so-SO,so;q=0.9,en;q=0.8"),
    ("ts", "ts-ZA,ts;q=0.9,en;q=0.8"),
    ("ve", "ve-ZA,ve;q=0.9,en;q=0.8"),
    ("sn", "sn-ZW,sn;q=0.9,en;q=0.8"),
    // Middle East
    ("fa", "fa-IR,fa;q=0.9,en;q=0.8"),
    ("he", "he-IL,he;q=0.9,en;q=0.8"),
    ("tr", "tr-TR,tr;q=0.9,en;q=0.8"),
    ("ku", "ku-IQ,ku;q=0.9,en;q=0.8"),
    // South and Southeast Asia
    ("bn", "bn-BD,bn;q=0.9,en;q=0.8"),
    ("ta", "ta-IN,ta;q=0.9,en;q=0.8"),
    ("te", "te-IN,te;q=0.9,en;q=0.8"),
    ("ml", "ml-IN,ml;q=0.9,en;q=0.8"),
    ("kn", "kn-IN,kn;q=0.9,en;q=0.8"),
    ("mr", "mr-IN,mr;q=0.9,en;q=0.8"),
    ("pa", "pa-IN,pa;q=0.9,en;q=0.8"),
    ("gu", "gu-IN,gu;q=0.9,en;q=0.8"),
    ("si", "si-LK,si;q=0.9,en;q=0.8"),
    ("ne", "ne-NP,ne;q=0.9,en;q=0.8"),
    ("th", "th-TH,th;q=0.9,en;q=0.8"),
    ("km", "km-KH,km;q=0.9,en;q=0.8"),
    ("my", "my-MM,my;q=0.9,en;q=0.8"),
    ("lo", "lo-LA,lo;q=0.9,en;q=0.8"),
    ("vi", "vi-VN,vi;q=0.9,en;q=0.8"),
    ("id", "id-ID,id;q=0.9,en;q=0.8"),
    ("ms", "ms-MY,ms;q=0.9,en;q=0.8"),
    ("fil", "fil-PH,fil;q=0.9,en;q=0.8"),
    // Europe
    ("pl", "pl-PL,pl;q=0.9,en;q=0.8"),
    ("nl", "nl-NL,nl;q=0.9,en;q=0.8"),
    ("sv", "sv-SE,sv;q=0.9,en;q=0.8"),
    ("no", "no-NO,no;q=0.9,en;q=0.8"),
    ("da", "da-DK,da;q=0.9,en;q=0.8"),
    ("fi", "fi-FI,fi;q=0.9,en;q=0.8"),
    ("cs", "cs-CZ,cs;q=0.9,en;q=0.8"),
    ("sk", "sk-SK,sk;q=0.9,en;q=0.8"),
    ("hu", "hu-HU,hu;q=0.9,en;q=0.8"),
    ("el", "el-GR,el;q=0.9,en;q=0.8"),
    ("uk", "uk-UA,uk;q=0.9,en;q=0.8"),
    ("ro", "ro-RO,ro;q=0.9,en;q=0.8"),
    ("bg", "bg-BG,bg;q=0.9,en;q=0.8"),
    ("sr", "sr-RS,sr;q=0.9,en;q=0.8"),
    ("hr", "hr-HR,hr;q=0.9,en;q=0.8"),
    ("sl", "sl-SI,sl;q=0.9,en;q=0.8"),
    ("lt", "lt-LT,lt;q=0.9,en;q=0.8"),
    ("lv", "lv-LV,lv;q=0.9,en;q=0.8"),
    ("et", "et-EE,et;q=0.9,en;q=0.8"),
    ("is", "is-IS,is;q=0.9,en;q=0.8"),
];

static LANGUAGE_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| LANGUAGES.iter().copied().collect());

/// Picks the `Accept-Language` header value for a language code.
///
/// The lookup ignores case and surrounding whitespace. Missing, empty or
/// unknown codes fall back to [`DEFAULT_ACCEPT_LANGUAGE`].
pub fn negotiate(code: Option<&str>) -> &'static str {
    let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
        return DEFAULT_ACCEPT_LANGUAGE;
    };
    match LANGUAGE_MAP.get(code.to_ascii_lowercase().as_str()).copied() {
        Some(value) => value,
        None => {
            ::log::debug!("Unknown language code {:?}, using default", code);
            DEFAULT_ACCEPT_LANGUAGE
        }
    }
}
