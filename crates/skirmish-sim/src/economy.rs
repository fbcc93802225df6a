//! Shop economy: purchase validation and upgrade effects.

use skirmish_core::components::Player;
use skirmish_core::enums::{GunKind, ShopItem};

/// Result of confirming a shop entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// `Done` selected; the shop closes.
    Leave,
    Bought { cost: u32 },
    Denied { cost: u32, currency: u32 },
}

/// Whether the player can pay for `item`. `Done` is always "affordable".
pub fn can_afford(player: &Player, item: ShopItem) -> bool {
    item.cost().map_or(true, |cost| player.currency >= cost)
}

/// Buy `item` for the player: deduct the cost and apply the upgrade, or
/// leave the player untouched when funds are short.
pub fn purchase(player: &mut Player, item: ShopItem) -> PurchaseOutcome {
    let Some(cost) = item.cost() else {
        return PurchaseOutcome::Leave;
    };

    if player.currency < cost {
        return PurchaseOutcome::Denied {
            cost,
            currency: player.currency,
        };
    }

    player.currency -= cost;
    apply_upgrade(player, item);
    PurchaseOutcome::Bought { cost }
}

fn apply_upgrade(player: &mut Player, item: ShopItem) {
    match item {
        ShopItem::ExtraArmor => player.full_armor += 1,
        ShopItem::PowerUp => player.gun_power += 1,
        ShopItem::DoubleGun => player.gun_kind = GunKind::Double,
        ShopItem::TripleGun => player.gun_kind = GunKind::Triple,
        ShopItem::Done => {}
    }
}
