//! The fixed recovery-phrase vocabulary.
//!
//! 256 entries so a single random byte indexes a word uniformly, with
//! no modulo bias. The list is sorted and lowercase; `validate_phrase`
//! relies on both properties for binary search.

pub const WORDLIST: [&str; 256] = [
    "acid",
    "acorn",
    "actor",
    "adobe",
    "agent",
    "alarm",
    "album",
    "alley",
    "amber",
    "angle",
    "ankle",
    "apple",
    "apron",
    "arena",
    "argue",
    "arrow",
    "aspen",
    "atlas",
    "atom",
    "audio",
    "autumn",
    "award",
    "axis",
    "bacon",
    "badge",
    "bagel",
    "baker",
    "bamboo",
    "banjo",
    "barley",
    "basil",
    "beach",
    "beacon",
    "beard",
    "beaver",
    "bell",
    "berry",
    "birch",
    "bison",
    "blade",
    "blaze",
    "bloom",
    "board",
    "bonus",
    "booth",
    "brass",
    "brave",
    "bread",
    "breeze",
    "brick",
    "bridge",
    "broom",
    "brush",
    "buddy",
    "bugle",
    "bunny",
    "butter",
    "cabin",
    "cable",
    "cactus",
    "camel",
    "candle",
    "canoe",
    "canyon",
    "cargo",
    "carrot",
    "castle",
    "cedar",
    "cellar",
    "chalk",
    "charm",
    "cheese",
    "cherry",
    "chess",
    "chime",
    "cider",
    "cinema",
    "circle",
    "citrus",
    "clay",
    "cliff",
    "cloud",
    "clover",
    "coast",
    "cobalt",
    "coffee",
    "comet",
    "copper",
    "coral",
    "cotton",
    "cougar",
    "cradle",
    "crane",
    "crater",
    "crayon",
    "creek",
    "cricket",
    "crown",
    "crystal",
    "cypress",
    "daisy",
    "dawn",
    "delta",
    "denim",
    "desert",
    "dial",
    "diesel",
    "dome",
    "donkey",
    "drift",
    "drum",
    "dune",
    "eagle",
    "easel",
    "echo",
    "elbow",
    "elder",
    "ember",
    "engine",
    "envoy",
    "ethos",
    "fable",
    "falcon",
    "fern",
    "ferry",
    "fiddle",
    "field",
    "flame",
    "flask",
    "fleet",
    "flint",
    "flora",
    "flute",
    "forest",
    "fossil",
    "fox",
    "galaxy",
    "garden",
    "garlic",
    "gazebo",
    "geyser",
    "ginger",
    "glacier",
    "glade",
    "globe",
    "goose",
    "gorge",
    "granite",
    "grape",
    "gravel",
    "grove",
    "guitar",
    "gull",
    "hammer",
    "harbor",
    "harp",
    "hazel",
    "heron",
    "hickory",
    "hill",
    "honey",
    "horizon",
    "hound",
    "iceberg",
    "igloo",
    "indigo",
    "iris",
    "island",
    "ivory",
    "ivy",
    "jade",
    "jaguar",
    "jasmine",
    "jasper",
    "jelly",
    "jigsaw",
    "journey",
    "jungle",
    "juniper",
    "kayak",
    "kelp",
    "kettle",
    "kiosk",
    "kite",
    "koala",
    "lagoon",
    "lantern",
    "larch",
    "laurel",
    "lava",
    "leaf",
    "ledge",
    "lemon",
    "lentil",
    "lilac",
    "lily",
    "linen",
    "lizard",
    "llama",
    "lobster",
    "locket",
    "lotus",
    "lunar",
    "lyric",
    "machine",
    "magnet",
    "mango",
    "maple",
    "marble",
    "marsh",
    "meadow",
    "melon",
    "mesa",
    "meteor",
    "mint",
    "mirror",
    "mocha",
    "molar",
    "moose",
    "moss",
    "motto",
    "mural",
    "myrtle",
    "nectar",
    "night",
    "noble",
    "north",
    "nugget",
    "nutmeg",
    "oasis",
    "ocean",
    "olive",
    "onion",
    "opal",
    "orbit",
    "orchard",
    "otter",
    "owl",
    "oyster",
    "paddle",
    "pagoda",
    "palm",
    "panda",
    "pansy",
    "paper",
    "parade",
    "parrot",
    "peach",
    "pebble",
    "pecan",
    "penguin",
    "peony",
    "pepper",
    "petal",
    "pine",
    "planet",
];
