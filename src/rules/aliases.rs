//! The built-in alias table.
//!
//! Works are the mainline titles 6 through 18 (plus 12.8), keyed by their
//! release number. Aliases are matched against lower-cased input, so the
//! casing here is only for readability.
//!
//! Keep in mind that every short ASCII alias here is matched anywhere in the
//! text, including inside longer words: the work pass runs first, so e.g.
//! `"sa"` (Subterranean Animism) is taken out of `"marisa"` before the
//! character pass sees it.

use crate::{Dictionaries, DictionaryBuilder, Result};

/// Characters that have a seasonal (`SA`..`SD`) composite alias.
const SEASON_CHARACTERS: &[&str] = &["Reimu", "Marisa", "Cirno", "Aya"];
const SEASON_CODES: &[&str] = &["SA", "SB", "SC", "SD"];

/// Characters that have a familiar (`W`/`O`/`E`) composite alias.
const FAMILIAR_CHARACTERS: &[&str] = &["Reimu", "Marisa", "Youmu"];
const FAMILIAR_CODES: &[&str] = &["W", "O", "E"];

/// Build the built-in dictionaries.
pub(crate) fn get() -> Result<Dictionaries> {
    let mut builder = DictionaryBuilder::new();
    register(&mut builder)?;
    Ok(builder.build())
}

pub(crate) fn register(builder: &mut DictionaryBuilder) -> Result<()> {
    register_works(builder)?;
    register_ranks(builder)?;
    register_characters(builder)?;
    register_ctypes(builder)?;
    register_routes(builder)?;
    register_composites(builder)
}

fn register_works(b: &mut DictionaryBuilder) -> Result<()> {
    work!(b, "6" => ["红", "红魔乡", "hmx", "th6", "th06", "EoSD"]);
    work!(b, "7" => ["妖", "妖妖梦", "yym", "th7", "th07", "PCB"]);
    work!(b, "8" => ["永", "永夜抄", "yyc", "th8", "th08", "IN"]);
    work!(b, "9" => ["花", "花映塚", "hyz", "th9", "th09", "PoFV"]);
    work!(b, "10" => ["风", "风神录", "fsl", "th10", "MoF"]);
    work!(b, "11" => ["地", "殿", "地灵殿", "dld", "th11", "SA"]);
    work!(b, "12" => ["星", "船", "星莲船", "xlc", "th12", "UFO"]);
    work!(b, "128" => ["精", "大战争", "dzz", "th128", "128"]);
    work!(b, "13" => ["神", "庙", "神灵庙", "slm", "th13", "TD"]);
    work!(b, "14" => ["辉", "城", "辉针城", "hzc", "th14", "DDC"]);
    work!(b, "15" => ["绀", "绀珠传", "gzz", "th15", "LoLK"]);
    work!(b, "16" => ["天", "空", "天空璋", "tkz", "th16", "HSiFS"]);
    work!(b, "17" => ["鬼", "鬼形兽", "gxs", "th17", "WBaWC"]);
    work!(b, "18" => ["虹", "龙", "虹龙洞", "hld", "th18", "UM"]);
    Ok(())
}

fn register_ranks(b: &mut DictionaryBuilder) -> Result<()> {
    other!(b, SetRank, "Easy" => ["e"]);
    other!(b, SetRank, "Normal" => ["n"]);
    other!(b, SetRank, "Hard" => ["h"]);
    other!(b, SetRank, "Lunatic" => ["l"]);
    other!(b, SetRank, "Extra" => ["ex", "Phantasm", "ph"]);
    Ok(())
}

fn register_characters(b: &mut DictionaryBuilder) -> Result<()> {
    other!(b, AddCharacter, "Reimu" => ["灵", "梦", "灵梦", "博丽", "巫女", "灵梦酱", "博丽灵梦", "Reimu"]);
    other!(b, AddCharacter, "Marisa" => ["魔", "魔理沙", "m", "黑白", "黑白魔女", "Marisa"]);
    other!(b, AddCharacter, "Sakuya" => ["咲", "咲夜", "s", "16", "女仆", "十六夜", "咲16", "Sakuya"]);
    other!(b, AddCharacter, "Sanae" => ["苗", "早苗", "Sanae"]);
    other!(b, AddCharacter, "Youmu" => ["魂", "魂魄", "半灵", "白楼剑", "Youmu"]);
    // Team shots.
    other!(b, AddCharacter, "RY" => ["结界组", "RY", "灵梦与紫"]);
    other!(b, AddCharacter, "MA" => ["咏唱组", "MA", "魔理沙与爱丽丝"]);
    other!(b, AddCharacter, "SR" => ["主仆组", "SR", "咲夜与蕾米莉亚"]);
    other!(b, AddCharacter, "YY" => ["冥界组", "YY", "幽幽子与魂魄"]);
    other!(b, AddCharacter, "Yukari" => ["紫", "八云紫", "紫妈", "Yukari"]);
    other!(b, AddCharacter, "Alice" => ["爱丽", "爱丽丝", "人偶师", "人偶", "爱丽丝酱", "七色魔法使", "Alice"]);
    other!(b, AddCharacter, "Remilia" => ["蕾米", "蕾米莉亚", "大小姐", "蕾米大小姐", "Remilia", "蕾米莉亚大人"]);
    other!(b, AddCharacter, "Yuyuko" => ["幽幽子", "uuz", "亡灵公主", "Yuyuko", "西行寺幽幽子"]);
    other!(b, AddCharacter, "Reisen" => ["铃仙", "兔子", "优昙华", "Reisen"]);
    other!(b, AddCharacter, "Cirno" => ["琪露诺", "⑨", "Cirno"]);
    other!(b, AddCharacter, "Aya" => ["文", "文文", "射命丸文", "Aya"]);
    Ok(())
}

fn register_ctypes(b: &mut DictionaryBuilder) -> Result<()> {
    // Shot types.
    other!(b, AddCType, "A" => ["A"]);
    other!(b, AddCType, "B" => ["B"]);
    other!(b, AddCType, "C" => ["C"]);
    // Seasons.
    other!(b, AddCType, "Spring" => ["春"]);
    other!(b, AddCType, "Summer" => ["夏"]);
    other!(b, AddCType, "Autumn" => ["秋"]);
    other!(b, AddCType, "Winter" => ["冬"]);
    // Familiars.
    other!(b, AddCType, "Wolf" => ["狼"]);
    other!(b, AddCType, "Otter" => ["獭"]);
    other!(b, AddCType, "Eagle" => ["鹰"]);
    Ok(())
}

fn register_routes(b: &mut DictionaryBuilder) -> Result<()> {
    other!(b, AddRoute, "6A" => ["6A"]);
    other!(b, AddRoute, "6B" => ["6B"]);
    Ok(())
}

fn register_composites(b: &mut DictionaryBuilder) -> Result<()> {
    for code in SEASON_CODES {
        for character in SEASON_CHARACTERS {
            b.composite(&format!("{character}{code}"))?;
        }
    }
    for code in FAMILIAR_CODES {
        for character in FAMILIAR_CHARACTERS {
            b.composite(&format!("{character}{code}"))?;
        }
    }
    Ok(())
}
