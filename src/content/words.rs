/// Secret words for the impostor game. Everyday concrete things a table can
/// circle with one-word clues without naming outright.
pub const WORDS: &[&str] = &[
    "Pizza",
    "Lighthouse",
    "Umbrella",
    "Volcano",
    "Library",
    "Penguin",
    "Submarine",
    "Campfire",
    "Waterfall",
    "Telescope",
    "Sandcastle",
    "Thunderstorm",
    "Chocolate",
    "Skateboard",
    "Windmill",
    "Octopus",
    "Fireworks",
    "Igloo",
    "Carousel",
    "Hammock",
    "Parachute",
    "Aquarium",
    "Scarecrow",
    "Treehouse",
    "Tornado",
    "Espresso",
    "Jukebox",
    "Kayak",
    "Labyrinth",
    "Marmalade",
    "Origami",
    "Pyramid",
    "Quicksand",
    "Rollercoaster",
    "Snowman",
    "Trampoline",
    "Unicycle",
    "Vineyard",
    "Wheelbarrow",
    "Xylophone",
    "Yoga",
    "Zeppelin",
    "Avalanche",
    "Bonfire",
    "Cathedral",
    "Dominoes",
    "Eclipse",
    "Fountain",
    "Glacier",
    "Harmonica",
    "Iceberg",
    "Jackpot",
    "Karaoke",
    "Lasagna",
    "Mosaic",
    "Nightmare",
    "Orchestra",
    "Passport",
    "Quarantine",
    "Rainbow",
    "Safari",
    "Tuxedo",
    "Ukulele",
    "Vampire",
    "Waffle",
    "Yacht",
    "Zodiac",
    "Bubblegum",
    "Catapult",
    "Dandelion",
    "Earthquake",
    "Flamingo",
];
