/// Register work aliases on a `DictionaryBuilder`, propagating errors.
///
/// `work!(builder, "6" => ["红魔乡", "th06", "EoSD"]);`
macro_rules! work {
    ($builder:expr, $label:literal => [ $($alias:literal),+ $(,)? ]) => {
        $builder.register_work($label, &[ $($alias),+ ])?
    };
}

/// Register aliases in the other dictionary with the given `TagAction` variant.
///
/// `other!(builder, AddCharacter, "Reimu" => ["灵梦", "Reimu"]);`
macro_rules! other {
    ($builder:expr, $kind:ident, $label:literal => [ $($alias:literal),+ $(,)? ]) => {
        $builder.register_other($crate::TagAction::$kind, $label, &[ $($alias),+ ])?
    };
}
