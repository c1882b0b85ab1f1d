#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StorySection {
    pub title: &'static str,
    pub body: &'static str,
}

impl StorySection {
    pub fn anchor_id(index: usize) -> String {
        format!("section-{}", index)
    }
}

// Trail order matters, the numbering in each title follows it.
pub const STORY_SECTIONS: [StorySection; 7] = [
    StorySection {
        title: "1. The Beginning of the Trail",
        body: "It started with a sound — the soft crunch of footsteps on gravel, a rhythm that seemed to echo a heartbeat. The evening sun dipped low, painting the sky with amber and rose. In that fading light, Ethan took his first step toward the unknown, guided only by curiosity and the faint scent of cedar in the air.",
    },
    StorySection {
        title: "2. The Whispering Forest",
        body: "As he entered the woods, silence wrapped around him like a velvet cloak. The trees seemed alive, whispering secrets in a language older than time. Each rustle of leaves carried a story, each gust of wind felt like a warning or a welcome. Ethan couldn’t tell which — and that made it all the more thrilling.",
    },
    StorySection {
        title: "3. The Hidden Symbol",
        body: "Halfway through the forest, he found it — a small, carved mark on an ancient oak. It wasn’t random. It looked deliberate, like someone had left a message only the right eyes could see. He traced the lines with his fingers, feeling a strange pulse beneath the bark, as if the tree itself remembered who had carved it.",
    },
    StorySection {
        title: "4. The Stranger by the River",
        body: "When the path opened to a river, he wasn’t alone. A figure stood across the water, cloaked in shadow but somehow familiar. The stranger didn’t speak — only nodded once, before disappearing behind the mist. Ethan felt a spark of recognition, though he couldn’t explain why. The moment lingered like a dream he couldn’t wake from.",
    },
    StorySection {
        title: "5. The Fire and the Memory",
        body: "That night, Ethan built a small fire. The flames danced wildly, throwing sparks that looked like stars escaping gravity. As he watched, memories he didn’t know he had began to surface — laughter, loss, promises made under starlight. It was as if the fire was burning through time itself, revealing what had always been hidden.",
    },
    StorySection {
        title: "6. The Door of Light",
        body: "At dawn, he reached a clearing. There stood an arch of stone covered in moss, glowing faintly with light from within. It wasn’t just a doorway — it was an invitation. He hesitated for a heartbeat, then stepped through. The air shimmered, and the world on the other side felt both new and ancient, strange yet utterly right.",
    },
    StorySection {
        title: "7. The Return",
        body: "When Ethan finally emerged, the forest was gone. Or maybe, it had never existed outside his mind. He carried with him no proof — only a calm certainty that something within him had changed. The trail had not led him away from himself, but back to where he had always belonged.",
    },
];
