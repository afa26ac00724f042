use super::Spectrum;

/// Axis deck for the wavelength game. Left is always the 0 end.
pub const SPECTRA: &[Spectrum] = &[
    Spectrum { left: "Hot", right: "Cold" },
    Spectrum { left: "Rare", right: "Common" },
    Spectrum { left: "Useless", right: "Useful" },
    Spectrum { left: "Terrifying", right: "Comforting" },
    Spectrum { left: "Round", right: "Pointy" },
    Spectrum { left: "Cheap", right: "Expensive" },
    Spectrum { left: "Quiet", right: "Loud" },
    Spectrum { left: "Soft", right: "Hard" },
    Spectrum { left: "Old-Fashioned", right: "Futuristic" },
    Spectrum { left: "Underrated", right: "Overrated" },
    Spectrum { left: "Guilty Pleasure", right: "Openly Loved" },
    Spectrum { left: "Unhealthy", right: "Healthy" },
    Spectrum { left: "Dangerous", right: "Safe" },
    Spectrum { left: "Casual", right: "Formal" },
    Spectrum { left: "Small Talk", right: "Deep Conversation" },
    Spectrum { left: "Introvert Activity", right: "Extrovert Activity" },
    Spectrum { left: "Mainstream", right: "Niche" },
    Spectrum { left: "Sweet", right: "Savory" },
    Spectrum { left: "Low Effort", right: "High Effort" },
    Spectrum { left: "Replaceable", right: "Irreplaceable" },
    Spectrum { left: "Bad Habit", right: "Good Habit" },
    Spectrum { left: "Science", right: "Art" },
    Spectrum { left: "Practical Gift", right: "Romantic Gift" },
    Spectrum { left: "Fragile", right: "Indestructible" },
    Spectrum { left: "Boring", right: "Thrilling" },
    Spectrum { left: "Smells Bad", right: "Smells Good" },
    Spectrum { left: "Easy to Learn", right: "Hard to Learn" },
    Spectrum { left: "Temporary", right: "Permanent" },
    Spectrum { left: "Natural", right: "Artificial" },
    Spectrum { left: "Optional", right: "Mandatory" },
    Spectrum { left: "Dry", right: "Wet" },
    Spectrum { left: "Light", right: "Heavy" },
    Spectrum { left: "Slow", right: "Fast" },
    Spectrum { left: "Worst Superpower", right: "Best Superpower" },
    Spectrum { left: "Bad Pizza Topping", right: "Good Pizza Topping" },
    Spectrum { left: "Movie Everyone Has Seen", right: "Movie Nobody Has Seen" },
];
