use alloy::sol;

sol! {
#[sol(rpc)]
interface IAssetToken {
    function initialize(address recipient, uint256 initialSupply) external;

    function balanceOf(address account) external view returns (uint256);

    function totalSupply() external view returns (uint256);

    function symbol() external view returns (string);
}
}

sol! {
#[sol(rpc)]
interface ITokenVault {
    function initialize(address admin) external;

    function setToken(address token) external;

    function setWithdrawalEnabled(bool enabled) external;

    function setMaxWithdrawalAmount(uint256 amount) external;

    function grantRole(bytes32 role, address account) external;

    function token() external view returns (address);

    function withdrawalEnabled() external view returns (bool);

    function maxWithdrawalAmount() external view returns (uint256);

    function hasRole(bytes32 role, address account) external view returns (bool);
}
}
