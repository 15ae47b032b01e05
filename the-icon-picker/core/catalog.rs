//! The icon catalog: every identifier the picker can offer.
//!
//! Identifiers are canonical kebab-case names. The built-in catalog mirrors
//! the lucide glyph set and is alphabetical; the picker never reorders it.
//! Consumers receive the catalog as an explicit value (usually an `Arc`)
//! rather than reaching for a module global, so tests can run against a
//! small fixture catalog.

use std::sync::Arc;

use once_cell::sync::Lazy;

/// An immutable, ordered set of icon identifiers. Fixed for the process
/// lifetime; there is no runtime insertion or removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
  names: Box<[Box<str>]>,
}

impl Catalog {
  pub fn new<I, S>(names: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<Box<str>>,
  {
    Self {
      names: names.into_iter().map(Into::into).collect(),
    }
  }

  /// The built-in lucide catalog.
  pub fn builtin() -> Arc<Catalog> {
    static BUILTIN: Lazy<Arc<Catalog>> = Lazy::new(|| Arc::new(Catalog::new(BUILTIN_NAMES.iter().copied())));
    Arc::clone(&BUILTIN)
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.names.iter().map(AsRef::as_ref)
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  /// Whether `name` is a known identifier. Everything handed to the
  /// icon-rendering capability must pass this check first.
  pub fn contains(&self, name: &str) -> bool {
    self.names.iter().any(|known| known.as_ref() == name)
  }
}

/// All built-in identifiers, in catalog (alphabetical) order.
static BUILTIN_NAMES: &[&str] = &[
  "a-arrow-down",
  "a-arrow-up",
  "a-large-small",
  "accessibility",
  "activity",
  "air-vent",
  "airplay",
  "alarm-clock",
  "alarm-clock-check",
  "alarm-clock-off",
  "album",
  "align-center",
  "align-justify",
  "align-left",
  "align-right",
  "ambulance",
  "ampersand",
  "anchor",
  "angry",
  "annoyed",
  "antenna",
  "anvil",
  "aperture",
  "app-window",
  "apple",
  "archive",
  "archive-restore",
  "archive-x",
  "armchair",
  "arrow-big-down",
  "arrow-big-left",
  "arrow-big-right",
  "arrow-big-up",
  "arrow-down",
  "arrow-left",
  "arrow-right",
  "arrow-up",
  "asterisk",
  "at-sign",
  "atom",
  "audio-lines",
  "audio-waveform",
  "award",
  "axe",
  "baby",
  "backpack",
  "badge",
  "badge-alert",
  "badge-check",
  "badge-dollar-sign",
  "baggage-claim",
  "ban",
  "banana",
  "banknote",
  "bar-chart",
  "barcode",
  "bath",
  "battery",
  "battery-charging",
  "battery-full",
  "battery-low",
  "beaker",
  "bed",
  "bell",
  "bell-off",
  "bell-ring",
  "bike",
  "binary",
  "binoculars",
  "bird",
  "bitcoin",
  "blend",
  "blinds",
  "blocks",
  "bluetooth",
  "bold",
  "bolt",
  "bomb",
  "bone",
  "book",
  "book-open",
  "bookmark",
  "bot",
  "box",
  "braces",
  "brackets",
  "brain",
  "briefcase",
  "brush",
  "bug",
  "building",
  "bus",
  "cable",
  "cake",
  "calculator",
  "calendar",
  "calendar-check",
  "calendar-days",
  "camera",
  "camera-off",
  "candy",
  "car",
  "carrot",
  "cast",
  "castle",
  "cat",
  "check",
  "check-check",
  "chevron-down",
  "chevron-left",
  "chevron-right",
  "chevron-up",
  "church",
  "cigarette",
  "circle",
  "circle-alert",
  "circle-check",
  "circle-dollar-sign",
  "circle-help",
  "circle-x",
  "citrus",
  "clapperboard",
  "clipboard",
  "clipboard-check",
  "clock",
  "cloud",
  "cloud-download",
  "cloud-off",
  "cloud-rain",
  "cloud-snow",
  "clover",
  "code",
  "codepen",
  "coffee",
  "cog",
  "coins",
  "columns-2",
  "command",
  "compass",
  "component",
  "computer",
  "construction",
  "contact",
  "cookie",
  "copy",
  "copyright",
  "cpu",
  "credit-card",
  "croissant",
  "crop",
  "cross",
  "crown",
  "cup-soda",
  "currency",
  "database",
  "delete",
  "diamond",
  "dice-1",
  "dice-2",
  "dice-3",
  "disc",
  "divide",
  "dna",
  "dog",
  "dollar-sign",
  "door-closed",
  "door-open",
  "download",
  "dribbble",
  "droplet",
  "drum",
  "dumbbell",
  "ear",
  "earth",
  "eclipse",
  "egg",
  "ellipsis",
  "equal",
  "eraser",
  "euro",
  "expand",
  "external-link",
  "eye",
  "eye-off",
  "facebook",
  "factory",
  "fan",
  "feather",
  "figma",
  "file",
  "file-check",
  "file-code",
  "file-text",
  "film",
  "filter",
  "fingerprint",
  "fish",
  "flag",
  "flame",
  "flashlight",
  "flask-conical",
  "flower",
  "focus",
  "folder",
  "folder-open",
  "footprints",
  "forklift",
  "frame",
  "frown",
  "fuel",
  "gamepad",
  "gauge",
  "gavel",
  "gem",
  "ghost",
  "gift",
  "git-branch",
  "github",
  "gitlab",
  "glasses",
  "globe",
  "graduation-cap",
  "grape",
  "grid-2x2",
  "grip",
  "guitar",
  "hammer",
  "hand",
  "hard-drive",
  "hash",
  "haze",
  "headphones",
  "heart",
  "heart-pulse",
  "hexagon",
  "highlighter",
  "history",
  "hospital",
  "hourglass",
  "house",
  "image",
  "inbox",
  "infinity",
  "info",
  "instagram",
  "italic",
  "key",
  "keyboard",
  "lamp",
  "landmark",
  "languages",
  "laptop",
  "lasso",
  "laugh",
  "layers",
  "layout-dashboard",
  "leaf",
  "library",
  "lightbulb",
  "link",
  "linkedin",
  "list",
  "list-checks",
  "loader",
  "lock",
  "log-in",
  "log-out",
  "magnet",
  "mail",
  "map",
  "map-pin",
  "martini",
  "maximize",
  "medal",
  "megaphone",
  "meh",
  "menu",
  "merge",
  "mic",
  "mic-off",
  "microscope",
  "milestone",
  "minimize",
  "minus",
  "monitor",
  "moon",
  "mountain",
  "mouse",
  "move",
  "music",
  "navigation",
  "network",
  "newspaper",
  "notebook",
  "octagon",
  "orbit",
  "package",
  "paintbrush",
  "palette",
  "paperclip",
  "party-popper",
  "pause",
  "pen",
  "pencil",
  "percent",
  "phone",
  "piano",
  "pickaxe",
  "picture-in-picture",
  "piggy-bank",
  "pilcrow",
  "pill",
  "pin",
  "pipette",
  "pizza",
  "plane",
  "play",
  "plug",
  "plus",
  "pocket",
  "podcast",
  "pointer",
  "popcorn",
  "power",
  "printer",
  "puzzle",
  "pyramid",
  "qr-code",
  "quote",
  "rabbit",
  "radar",
  "radio",
  "rainbow",
  "receipt",
  "recycle",
  "redo",
  "refresh-ccw",
  "refresh-cw",
  "regex",
  "repeat",
  "reply",
  "rocket",
  "rotate-ccw",
  "rotate-cw",
  "route",
  "rss",
  "ruler",
  "save",
  "scale",
  "scan",
  "school",
  "scissors",
  "search",
  "send",
  "server",
  "settings",
  "shapes",
  "share",
  "shield",
  "shield-check",
  "ship",
  "shirt",
  "shopping-bag",
  "shopping-cart",
  "shovel",
  "shrink",
  "shuffle",
  "signal",
  "skull",
  "slash",
  "slice",
  "smartphone",
  "smile",
  "smile-plus",
  "snail",
  "snowflake",
  "sofa",
  "sparkle",
  "sparkles",
  "speaker",
  "spline",
  "split",
  "sprout",
  "square",
  "squirrel",
  "stamp",
  "star",
  "step-forward",
  "stethoscope",
  "sticker",
  "store",
  "strikethrough",
  "sun",
  "sunrise",
  "sunset",
  "sword",
  "syringe",
  "table",
  "tablet",
  "tag",
  "target",
  "telescope",
  "tent",
  "terminal",
  "text",
  "theater",
  "thermometer",
  "thumbs-down",
  "thumbs-up",
  "ticket",
  "timer",
  "toggle-left",
  "toggle-right",
  "tornado",
  "tractor",
  "traffic-cone",
  "train-front",
  "trash",
  "trash-2",
  "tree-pine",
  "trello",
  "trending-down",
  "trending-up",
  "triangle",
  "trophy",
  "truck",
  "turtle",
  "tv",
  "type",
  "umbrella",
  "underline",
  "undo",
  "unlink",
  "upload",
  "usb",
  "user",
  "user-check",
  "user-minus",
  "user-plus",
  "users",
  "utensils",
  "variable",
  "vault",
  "video",
  "view",
  "voicemail",
  "volume",
  "volume-1",
  "volume-2",
  "volume-x",
  "vote",
  "wallet",
  "wand",
  "warehouse",
  "watch",
  "waves",
  "webcam",
  "webhook",
  "wheat",
  "wifi",
  "wifi-off",
  "wind",
  "wine",
  "workflow",
  "wrench",
  "x",
  "youtube",
  "zap",
  "zap-off",
  "zoom-in",
  "zoom-out",
];
