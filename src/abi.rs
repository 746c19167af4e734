//! Contract interfaces used on the hot path
//!
//! Minimal ERC-20 surface (metadata + transfer probe) and the two Uniswap
//! V2 router functions the executor needs.

use alloy_sol_types::sol;

sol! {
    // ERC20 (minimal)
    function name() external view returns (string);
    function symbol() external view returns (string);
    function transfer(address to, uint256 amount) external returns (bool);

    // Uniswap V2 Router
    function swapExactETHForTokens(
        uint256 amountOutMin,
        address[] calldata path,
        address to,
        uint256 deadline
    ) external payable returns (uint256[] memory amounts);

    function getAmountsOut(
        uint256 amountIn,
        address[] calldata path
    ) external view returns (uint256[] memory amounts);
}
