/// Static French term tables, one per semantic domain.
///
/// Pure data: the lookup rules live in [`crate::dictionary`]. Declared order
/// matters for `REQUIREMENTS` (substring rewrite walks it top to bottom).
use once_cell::sync::Lazy;

use crate::dictionary::Dictionary;

/// Closed table: every alignment phrase appearing in the source compendia is
/// expected to have an entry, and a miss is a data-completeness warning.
pub static ALIGNMENTS: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(
        "alignment",
        &[
            ("chaotic evil", "Chaotique Mauvais"),
            ("chaotic neutral", "Chaotique Neutre"),
            ("chaotic good", "Chaotique Bon"),
            ("neutral evil", "Neutre Mauvais"),
            ("true neutral", "Neutre"),
            ("neutral", "Neutre"),
            ("neutral good", "Neutre Bon"),
            (
                "neutral good evil(50%) or neutral evil(50%)",
                "Neutre Bon (50 %) ou Neutre Mauvais (50 %)",
            ),
            ("lawful evil", "Loyal Mauvais"),
            ("lawful neutral", "Loyal Neutre"),
            ("lawful good", "Loyal Bon"),
            ("chaotic good evil", "Chaotique Bon/Mauvais"),
            ("lawful chaotic evil", "Loyal/Chaotique Mauvais"),
            ("unaligned", "Non alignée"),
            ("any non-lawful alignment", "Tout alignement autre que Loyal"),
            ("any non-lawful", "Tout alignement autre que Loyal"),
            ("any non-good alignment", "Tout alignement autre que Bon"),
            ("any non-good", "Tout alignement autre que Bon"),
            ("any chaotic", "Tout alignement Chaotique"),
            ("any evil", "Tout alignement Mauvais"),
            ("any alignment", "Tout alignement"),
            ("any", "Tout alignement"),
        ],
    )
});

pub static LANGUAGES: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(
        "languages",
        &[
            ("giant eagle", "Aigle Géant"),
            ("worg", "Worg"),
            ("winter wolf", "Loup Artique"),
            ("sahuagin", "Sahuagin"),
            ("giant owl", "chouette géante"),
            ("blink dog", "chien esquiveur"),
            ("giant elk", "cervidé géant"),
            (
                "giant owl, understands but cannot speak all but giant owl",
                "Chouette Géante, comprend mais ne peut pas parler sauf en Chouette Géante",
            ),
            (
                "giant elk but can't speak them",
                "Elan Géant, mais ne peut pas le parler",
            ),
            (
                "common and auran (understands but cannot speak)",
                "comprend le commun et l'aérien mais ne les parle pas",
            ),
            (
                "understands abyssal, celestial, infernal, and primordial but can't speak",
                "comprend l'abyssal, le céleste, l'infernal et le primordial, mais ne parle pas",
            ),
            (
                "understands celestial, common, elvish, and sylvan but can't speak",
                "comprend le céleste, le commun, l'elfique et le sylvestre, mais ne parle pas",
            ),
            (
                "understands common, elvish, and sylvan but can't speak them",
                "comprend le commun, l'elfique et le sylvestre, mais ne peut pas les parler",
            ),
            (
                "understands abyssal, common, and infernal but can't speak",
                "comprend l'abyssal, le commun et l'infernal, mais ne parle pas",
            ),
            (
                "understands infernal but can't speak it",
                "comprend l'infernal mais ne peut pas le parler",
            ),
            (
                "understands draconic but can't speak",
                "comprend le draconic mais ne peut pas le parler",
            ),
            (
                "understands common but doesn't speak it",
                "comprend le commun mais ne peut pas le parler",
            ),
            (
                "understands common but can't speak",
                "comprend le commun, mais ne parle pas",
            ),
            (
                "understands abyssal but can't speak",
                "comprend l'infernal mais ne peut pas le parler",
            ),
            (
                "understands sylvan but can't speak it",
                "comprend le sylvestre, mais ne le parle pas",
            ),
            (
                "understands deep speech but can't speak",
                "comprend le profond, mais ne parle pas",
            ),
            (
                "understands commands given in any language but can't speak",
                "comprend les ordres donnés dans n'importe quelle langue mais ne peut pas parler",
            ),
            (
                "understands all languages it knew in life but can't speak",
                "comprend toutes les langues qu'il parlait de son vivant, mais ne parle pas",
            ),
            (
                "understands the languages it knew in life but can't speak",
                "comprend les langues qu'il parlait de son vivant, mais ne parle pas",
            ),
            ("understands but can't speak", "comprend mais ne parle pas"),
            (
                "(can't speak in rat form)",
                "(Ne peut pas parler sous forme de rat)",
            ),
            (
                "(can't speak in boar form)",
                "(ne peut pas parler sous forme de sanglier)",
            ),
            (
                "(can't speak in bear form)",
                "(ne peut pas parler sous forme d'ours)",
            ),
            (
                "(can't speak in tiger form)",
                "(ne peut pas parler sous forme de tigre)",
            ),
            (
                "(can't speak in wolf form)",
                "(ne peut pas parler sous forme de loup)",
            ),
            (
                "any one language (usually common)",
                "une langue quelconque (généralement le commun)",
            ),
            ("any one language", "une au choix"),
            ("any two", "deux au choix"),
            ("any two languages", "deux au choix"),
            ("any four languages", "quatre au choix"),
            ("5 other languages", "5 autres langues"),
            ("(any 6 languages)", "six au choix"),
            ("any, usually common", "généralement le commun"),
            (
                "one language known by its creator",
                "une langue connue de son créateur",
            ),
            (
                "the languages it knew in life",
                "celles qu'il parlait de son vivant",
            ),
            ("those it knew in life", "celles qu'il parlait de son vivant"),
            ("all it knew in life", "celles qu'il parlait de son vivant"),
            ("any it knew in life", "celles qu'il parlait de son vivant"),
            (
                "languages it knew in life",
                "celles qu'il parlait de son vivant",
            ),
            (
                "any languages it knew in life",
                "celles qu'il connaissait de son vivant",
            ),
            ("all, telepathy 120 ft.", "toutes, télépathie 36m"),
            ("telepathy 60 ft.", "télépathie 18m"),
            (
                "telepathy 60ft. (works only with creatures that understand abyssal)",
                "télépathie 18 m (ne fonctionne qu'avec les créatures qui comprennent l'abyssal)",
            ),
            (
                "telepathy 60 ft. (works only with creatures that understand abyssal)",
                "télépathie 18 m (ne fonctionne qu'avec les créatures qui comprennent l'abyssal)",
            ),
            ("telepathy 120 ft.", "télépathie 36m"),
            ("but can't speak", "mais ne peut pas parler"),
            ("but can't speak it", "mais ne peut pas le parler"),
            ("choice", "au choix"),
            (
                "all languages known to its summoner",
                "toutes les langues connues de la créature qui l'a convoqué",
            ),
            (
                "understands the languages of its creator but can't speak",
                "comprend les langues de son créateur mais ne paut pas les parler",
            ),
            (
                "understands the languages of its creator but cannot speak",
                "comprend les langues de son créateur, mais ne parle pas",
            ),
            (
                "understands common and giant but can't speak",
                "comprend le commun et le gigant, mais ne parle pas",
            ),
            ("cannot speak", "ne parle pas"),
            ("can't speak", "ne parle pas"),
            ("all", "toutes"),
        ],
    )
});

pub static CREATURE_TYPES: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(
        "types",
        &[
            ("dragonborn", "Drakéide"),
            ("dwarf", "Nain"),
            ("elf", "Elfe"),
            ("gnome", "Gnome"),
            ("orc", "Orc"),
            ("halfling", "Halfelin"),
            ("human", "Humain"),
            ("tiefling", "Tieffelin"),
            ("any race", "Toute race"),
            ("shapechanger", "Métamorphe"),
            ("demon", "Démon"),
            ("devil", "Diable"),
            ("goblinoid", "Gobelinoïde"),
            ("lizardfolk", "Saurial"),
            ("merfolk", "Thalasséen"),
            ("grimlock", "Torve"),
        ],
    )
});

/// Applied as a substring rewrite, not an exact match: class names, ability
/// abbreviations and familiar names get replaced wherever they occur inside
/// a requirement phrase. Order is load-bearing.
pub static REQUIREMENTS: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(
        "requirements",
        &[
            ("barbarian", "Barbare"),
            ("bard", "Barde"),
            ("cleric", "Clerc"),
            ("druid", "Druide"),
            ("fighter", "Guerrier"),
            ("monk", "Moine"),
            ("paladin", "Paladin"),
            ("ranger", "Rôdeur"),
            ("rogue", "Roublard"),
            ("sorcerer", "Ensorceleur"),
            ("warlock", "Occultiste"),
            ("wizard", "Magicien"),
            ("champion", "Champion"),
            ("college of lore", "Collège du savoir"),
            ("oath of devotion", "Serment de dévotion"),
            ("life domain", "Domaine de la Vie"),
            ("circle of the land", "Cercle de la terre"),
            ("the fiend", "Le fiélon"),
            ("hunter", "Chasseur"),
            ("school of evocation", "Ecole d'évocation"),
            ("path of the berserker", "Berserker"),
            ("eldritch blast", "Décharge occulte"),
            ("pact of the tome", "Pacte du grimoire"),
            ("pact of the blade", "Pacte de la lame"),
            ("pact of the chain", "Pacte de la chaîne"),
            ("way of the open hand", "Voie de la main ouverte"),
            ("draconic bloodline", "Lignée draconique"),
            ("str", "FOR"),
            ("or higher", "ou plus"),
            ("thief", "Voleur"),
            ("lightfoot halfling", "Halfelin pied-léger"),
            ("copper dragonborn", "Drakéide de cuivre"),
            ("bronze dragonborn", "Drakéide de bronze"),
            ("silver dragonborn", "Drakéide d'argent"),
            ("brass dragonborn", "Drakéide d'airain"),
            ("white dragonborn", "Drakéide blanc"),
            ("black dragonborn", "Drakéide noir"),
            ("green dragonborn", "Drakéide vert"),
            ("blue dragonborn", "Drakéide bleu"),
            ("gold dragonborn", "Drakéide d'or"),
            ("red dragonborn", "Drakéide rouge"),
            ("rock gnome", "Gnome des roches"),
            ("half-elf", "Demi-elfe"),
            ("tiefling", "Tieffelin"),
            ("half-orc", "Demi-Orc"),
            ("halfling", "Halfelin"),
            ("dwarf", "Nain"),
            ("elf", "Elfe"),
            ("owl", "Chouette"),
            ("octopus", "Pieuvre"),
            ("baboon", "Babouin"),
            ("lemure", "Lémure"),
            ("bats", "Chauves-souris"),
            ("bat", "Chauve-souris"),
            ("eagle", "Aigle"),
            ("frog", "Grenouille"),
            ("raven", "Corbeau"),
            ("jackal", "Chacal"),
            ("weasel", "Belette"),
            ("fire beetle", "Scarabée de feu"),
            ("vulture", "Vautour"),
            ("hawk", "Faucon"),
            ("awakened shrub", "Arbuste éveillé"),
            ("cat", "Chat"),
            ("badger", "Blaireau"),
            ("goat", "Chèvre"),
            ("hyena", "Hyène"),
        ],
    )
});

pub static SOURCES: Lazy<Dictionary> =
    Lazy::new(|| Dictionary::new("sources", &[("SRD 5.1", "DRS 5.1")]));

pub static ADVANCEMENT_HINTS: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(
        "advancement-hints",
        &[
            (
                "Light Armor, Medium Armor, & Shields (druids will not wear armor or use shields made of metal)",
                "Armures légères, armures intermédiaires, Boucliers (les druides ne portent ni armure ni bouclier faits de métal)",
            ),
            (
                "You adopt a particular style of fighting as your specialty. Choose one of the following options. You can’t take a Fighting Style option more than once, even if you later get to choose again.",
                "Vous choisissez de vous spécialiser dans un style de combat particulier. Choisissez l’une des options suivantes. Vous ne pouvez pas opter plus d’une fois pour un même Style de combat, si vous avez de nouveau la possibilité d’en choisir un.",
            ),
            (
                "Choose two 3rd-level wizard spells in your spellbook as your signature spells.",
                "Choisissez deux sorts de magicien du 3e niveau de votre grimoire comme sorts de prédilection.",
            ),
            (
                "Your mastery of the ki flowing through you makes you immune to disease and poison.",
                "Votre maîtrise du ki qui circule en vous est telle que vous devenez immunisé contre les maladies et les poisons.",
            ),
            (
                "If an eldritch invocation has prerequisites, you must meet them to learn it. You can learn the invocation at the same time that you meet its prerequisites. A level prerequisite refers to your level in this class.",
                "Si une manifestation occulte a des prérequis, vous devez les remplir pour l’apprendre. Vous pouvez apprendre une manifestation dès l’instant où vous remplissez ses prérequis. Un prérequis de niveau fait référence à votre niveau dans cette classe.",
            ),
            (
                "Choose one 6th-level spell from the warlock spell list as this arcanum.",
                "Choisissez comme arcanum un sort du 6e niveau dans la liste des sorts d’occultiste.",
            ),
            (
                "Choose one 7th-level spell from the warlock spell list as this arcanum.",
                "Choisissez comme arcanum un sort du 7e niveau dans la liste des sorts d’occultiste.",
            ),
            (
                "Choose one 8th-level spell from the warlock spell list as this arcanum.",
                "Choisissez comme arcanum un sort du 8e niveau dans la liste des sorts d’occultiste.",
            ),
            (
                "Choose one 9th-level spell from the warlock spell list as this arcanum.",
                "Choisissez comme arcanum un sort du 9e niveau dans la liste des sorts d’occultiste.",
            ),
            (
                "The divine magic flowing through you makes you immune to disease.",
                "La magie divine qui vous parcourt vous immunise contre les maladies.",
            ),
            (
                "Choose one of the following options. You can’t take a Fighting Style option more than once, even if you later get to choose again.",
                "Choisissez l’une des options suivantes. Vous ne pouvez pas opter plus d’une fois pour un même Style de combat, si vous avez de nouveau la possibilité d’en choisir un.",
            ),
            ("Expertise", "Expertise"),
            (
                "You have acquired greater mental strength. You gain proficiency in Wisdom saving throws.",
                "Vous avez acquis une grande force mentale. Vous recevez la maîtrise des jets de sauvegarde de Sagesse.",
            ),
        ],
    )
});

pub static ADVANCEMENT_TITLES: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(
        "advancement-titles",
        &[
            ("Unarmed Strike", "Frappe à mains nues (Moine)"),
            ("Cantrips Known", "Sorts mineurs connus"),
            ("Spells Known", "Sorts connus"),
            ("Bardic Inspiration Die", "Inspiration bardique"),
            ("Song of rest Die", "Chant reposant"),
            ("Brutal Critical Dice", "Critique brutal"),
            ("Rages", "Rages"),
            ("Rage Damage", "Dégâts de rage"),
            ("Wild Shape CR", "Forme sauvage"),
            ("Channel Divinity Uses", "Utilisations du Conduit divin"),
            ("Destroy Undead CR", "Destruction des morts-vivants"),
            ("Indomitable Uses", "Utilisations d'Inflexible"),
            ("Action Surge Uses", "Utilisations de la Fougue"),
            ("Martial Arts Die", "Dés d'Arts martiaux"),
            ("Aura Radius", "Rayon de l'Aura"),
            ("Fighting Style", "Style de combat"),
            ("Mystic Arcanum (6th level)", "Arcanum mystique (6e niveau)"),
            ("Mystic Arcanum (7th level)", "Arcanum mystique (7e niveau)"),
            ("Mystic Arcanum (8th level)", "Arcanum mystique (8e niveau)"),
            ("Mystic Arcanum (9th level)", "Arcanum mystique (9e niveau)"),
            ("Eldritch Invocations", "Manifestation occultes"),
            ("Pact Boon", "Pacte [Occultiste]"),
            ("Divine Strike Damage", "Dégâts d'Impact divin"),
            ("Additional Fighting Style", "Style de combat supplémentaire"),
            ("Hunter's Prey", "Proie du chasseur"),
            ("Defensive Tactics", "Tactiques défensives"),
            ("Multiattack", "Attaques multiples"),
            ("Superior Hunter's Defense", "Défense supérieure du chasseur"),
            ("Additionnal Magicat Secrets", "Secrets magiques supplémentaires"),
            ("Feature", "Aptitude"),
        ],
    )
});

pub static SPECIAL_SENSES: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(
        "special-senses",
        &[
            ("Blind beyond this radius", "ne voit rien au-delà de ce rayon"),
            (
                "10 ft. while deafened (blind beyond this radius)",
                " 3 m s'il est assourdi (ne voit rien au-delà de ce rayon)",
            ),
        ],
    )
});

pub static DAMAGES: Lazy<Dictionary> = Lazy::new(|| {
    Dictionary::new(
        "damages",
        &[
            (
                "advantage on saving throws against being charmed",
                "avantagé aux jets de sauvegarde contre l'état charmé",
            ),
            (
                "advantage on saving throws against charms",
                "avantagé aux jets de sauvegarde contre l'état charmé",
            ),
            (
                "advantage against being frightenned",
                "avantagé contre l'état effrayé",
            ),
            (
                "advantage against being frightened",
                "avantagé contre l'état effrayé",
            ),
            (
                "magic can't put you to sleep",
                "la magie ne peut pas vous endormir",
            ),
            ("magical sleep", "sommeil magique"),
            ("damage from spells", "dégâts des sorts"),
        ],
    )
});

pub static ARMORS: Lazy<Dictionary> =
    Lazy::new(|| Dictionary::new("armors", &[("(no metal)", "(pas en métal)")]));

#[cfg(test)]
mod tests {
    use super::*;

    /// Alignment phrases observed across the reference compendia. The table
    /// is closed: each of these must resolve, since an alignment miss is
    /// surfaced as a data error rather than passed through.
    const ALIGNMENT_CORPUS: &[&str] = &[
        "Chaotic Evil",
        "chaotic neutral",
        "Chaotic Good",
        "Neutral Evil",
        "True Neutral",
        "Neutral",
        "Neutral Good",
        "Lawful Evil",
        "Lawful Neutral",
        "Lawful Good",
        "Unaligned",
        "Any Non-Lawful Alignment",
        "Any Non-Good Alignment",
        "Any Chaotic",
        "Any Evil",
        "Any Alignment",
        "Any",
    ];

    #[test]
    fn alignment_table_covers_reference_corpus() {
        for phrase in ALIGNMENT_CORPUS {
            assert!(
                ALIGNMENTS.lookup(phrase).is_some(),
                "alignment table is missing {phrase:?}"
            );
        }
    }

    #[test]
    fn tables_are_populated() {
        assert!(!LANGUAGES.is_empty());
        assert!(!CREATURE_TYPES.is_empty());
        assert!(!REQUIREMENTS.is_empty());
        assert!(!ADVANCEMENT_TITLES.is_empty());
        assert!(!ADVANCEMENT_HINTS.is_empty());
        assert_eq!(SOURCES.lookup("srd 5.1"), Some("DRS 5.1"));
    }

    #[test]
    fn requirement_rewrite_uses_declared_order() {
        assert_eq!(
            REQUIREMENTS.rewrite_substrings("Str 13 or higher"),
            "FOR 13 ou plus"
        );
    }
}
